use serde::{Deserialize, Deserializer, Serialize};

use crate::model::ProfileId;

/// Public rating card of a user, as served by the backend.
///
/// The client treats a profile as an immutable snapshot: a new load replaces
/// it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id")]
    id: ProfileId,
    name: String,
    #[serde(default)]
    photo_url: String,
    #[serde(default, deserialize_with = "lenient_rating")]
    average_rating: Option<f64>,
    #[serde(default)]
    total_ratings: u64,
}

impl Profile {
    #[must_use]
    pub fn new(id: ProfileId, name: impl Into<String>, photo_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            photo_url: photo_url.into(),
            average_rating: None,
            total_ratings: 0,
        }
    }

    #[must_use]
    pub fn with_ratings(mut self, average_rating: Option<f64>, total_ratings: u64) -> Self {
        self.average_rating = average_rating;
        self.total_ratings = total_ratings;
        self
    }

    #[must_use]
    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn photo_url(&self) -> &str {
        &self.photo_url
    }

    /// Aggregate rating, `None` for profiles nobody has rated yet.
    #[must_use]
    pub fn average_rating(&self) -> Option<f64> {
        self.average_rating
    }

    #[must_use]
    pub fn total_ratings(&self) -> u64 {
        self.total_ratings
    }
}

/// Accepts a number, a numeric string (backends often send `toFixed` output)
/// or null. Anything else reads as "no rating yet".
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}
