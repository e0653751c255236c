use reqwest::StatusCode;
use tracing::warn;

use rate_core::model::Profile;

use crate::api::RatingApi;
use crate::error::{QueryError, RequestError};

/// The caller's own standing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub average_rating: Option<f64>,
    pub total_ratings: u64,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            average_rating: profile.average_rating(),
            total_ratings: profile.total_ratings(),
        }
    }
}

/// Fetch the caller's profile summary.
///
/// Read-only: the rating workflow is not touched.
///
/// # Errors
///
/// Returns `QueryError::NoPersonalProfile` when the backend has no profile for
/// the caller (404), `QueryError::Request` for any other failure.
pub async fn load_my_profile(api: &dyn RatingApi) -> Result<ProfileSummary, QueryError> {
    match api.my_profile().await {
        Ok(profile) => Ok(ProfileSummary::from(&profile)),
        Err(RequestError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
            warn!("caller has no personal profile yet");
            Err(QueryError::NoPersonalProfile)
        }
        Err(err) => {
            warn!(error = %err, "own profile load failed");
            Err(err.into())
        }
    }
}
