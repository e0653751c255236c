use serde::Serialize;

use crate::model::{BaseRating, ProfileId, TagName, TagSet};
use crate::scoring::score_for;

/// Body of a `POST /rate` call.
///
/// Built from the session right before sending and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSubmission {
    pub profile_id: ProfileId,
    pub score: f64,
    pub tags: Vec<TagName>,
    pub bonus: f64,
}

impl RatingSubmission {
    #[must_use]
    pub fn build(profile_id: ProfileId, base: BaseRating, tags: &TagSet) -> Self {
        let final_score = score_for(base, tags);
        Self {
            profile_id,
            score: final_score.score,
            tags: tags.to_vec(),
            bonus: final_score.bonus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape_uses_camel_case() {
        let tags: TagSet = ["kind", "funny"]
            .into_iter()
            .map(|t| TagName::new(t).unwrap())
            .collect();
        let submission = RatingSubmission::build(
            ProfileId::new("P1").unwrap(),
            BaseRating::clamped(9.0).unwrap(),
            &tags,
        );

        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "profileId": "P1",
                "score": 10.0,
                "tags": ["kind", "funny"],
                "bonus": 1.0
            })
        );
    }
}
