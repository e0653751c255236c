use tracing::{debug, warn};

use rate_core::model::Leaderboard;

use crate::api::RatingApi;
use crate::error::QueryError;

/// Where a click on the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the list.
    Backdrop,
    /// The list itself.
    Content,
}

/// Top-5 overlay. The list only lives while the overlay is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaderboardOverlay {
    open: Option<Leaderboard>,
}

impl LeaderboardOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn leaderboard(&self) -> Option<&Leaderboard> {
        self.open.as_ref()
    }

    /// Fetch the top list and open the overlay, also when the list is empty.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Request` on failure; the overlay keeps its
    /// previous visibility.
    pub async fn open(&mut self, api: &dyn RatingApi) -> Result<&Leaderboard, QueryError> {
        let top = api
            .top_five()
            .await
            .inspect_err(|err| warn!(error = %err, "top-5 load failed"))?;
        debug!(entries = top.len(), "opening leaderboard");
        Ok(&*self.open.insert(Leaderboard::from_profiles(top)))
    }

    pub fn dismiss(&mut self) {
        self.open = None;
    }

    /// Clicks outside the content close the overlay.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.dismiss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, InMemoryRatingApi};
    use rate_core::model::{Profile, ProfileId};
    use reqwest::StatusCode;

    fn profile(id: &str, rating: f64) -> Profile {
        Profile::new(ProfileId::new(id).unwrap(), id, "").with_ratings(Some(rating), 10)
    }

    #[tokio::test]
    async fn empty_result_still_opens() {
        let api = InMemoryRatingApi::new();
        let mut overlay = LeaderboardOverlay::new();

        let board = overlay.open(&api).await.unwrap();
        assert!(board.is_empty());
        assert!(overlay.is_open());
    }

    #[tokio::test]
    async fn content_click_keeps_overlay_open() {
        let api = InMemoryRatingApi::new().with_top([profile("A", 9.5), profile("B", 9.1)]);
        let mut overlay = LeaderboardOverlay::new();
        overlay.open(&api).await.unwrap();

        overlay.click(ClickTarget::Content);
        assert!(overlay.is_open());
        assert_eq!(overlay.leaderboard().unwrap().entries()[1].rank, 2);

        overlay.click(ClickTarget::Backdrop);
        assert!(!overlay.is_open());
        assert!(overlay.leaderboard().is_none());
    }

    #[tokio::test]
    async fn failure_leaves_overlay_closed() {
        let api = InMemoryRatingApi::new();
        api.fail_next(Endpoint::TopFive, StatusCode::INTERNAL_SERVER_ERROR, "db down");
        let mut overlay = LeaderboardOverlay::new();

        assert!(overlay.open(&api).await.is_err());
        assert!(!overlay.is_open());
    }

    #[tokio::test]
    async fn dismiss_closes() {
        let api = InMemoryRatingApi::new().with_top([profile("A", 9.5)]);
        let mut overlay = LeaderboardOverlay::new();
        overlay.open(&api).await.unwrap();

        overlay.dismiss();
        assert!(!overlay.is_open());
    }
}
