//! Request client: the backend contract and its implementations.

mod http;
mod memory;

use async_trait::async_trait;

use rate_core::model::{Profile, RatingSubmission};

use crate::error::RequestError;

pub use http::{HttpRatingApi, IDENTITY_HEADER, TokenSource};
pub use memory::InMemoryRatingApi;

/// Backend routes consumed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    RandomProfile,
    Rate,
    MyProfile,
    TopFive,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::RandomProfile => "/random-profile",
            Self::Rate => "/rate",
            Self::MyProfile => "/my-profile",
            Self::TopFive => "/top-5",
        }
    }
}

/// Backend contract for the rating mini-app.
///
/// Every call carries the caller's identity token. There is no retry or
/// token refresh at this layer.
#[async_trait]
pub trait RatingApi: Send + Sync {
    /// Fetch a profile to rate.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` on transport failure or non-success status.
    async fn random_profile(&self) -> Result<Profile, RequestError>;

    /// Submit a rating. The success body is ignored.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` on transport failure or non-success status.
    async fn rate(&self, submission: &RatingSubmission) -> Result<(), RequestError>;

    /// Fetch the caller's own profile with its aggregate rating.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` on transport failure or non-success status.
    async fn my_profile(&self) -> Result<Profile, RequestError>;

    /// Fetch at most five top-rated profiles, best first.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` on transport failure or non-success status.
    async fn top_five(&self) -> Result<Vec<Profile>, RequestError>;
}
