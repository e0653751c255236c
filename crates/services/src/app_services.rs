use std::sync::Arc;
use std::time::Duration;

use crate::api::{HttpRatingApi, RatingApi};
use crate::config::ClientConfig;
use crate::error::RequestError;
use crate::host::{HostShell, host_token_source};
use crate::queries::LeaderboardOverlay;
use crate::rating::RatingWorkflow;

/// Assembles the app-facing services around one backend client.
#[derive(Clone)]
pub struct AppServices {
    api: Arc<dyn RatingApi>,
    advance_delay: Duration,
}

impl AppServices {
    /// Build services talking to the HTTP backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the HTTP client cannot be created.
    pub fn http(config: &ClientConfig) -> Result<Self, RequestError> {
        let api = HttpRatingApi::new(config)?;
        Ok(Self::with_api(Arc::new(api), config.advance_delay()))
    }

    /// Like [`AppServices::http`], but the identity token is asked from
    /// `host` on every request.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the HTTP client cannot be created.
    pub fn http_with_host<H>(config: &ClientConfig, host: Arc<H>) -> Result<Self, RequestError>
    where
        H: HostShell + Send + Sync + 'static,
    {
        let api = HttpRatingApi::new(config)?.with_token_source(host_token_source(host));
        Ok(Self::with_api(Arc::new(api), config.advance_delay()))
    }

    #[must_use]
    pub fn with_api(api: Arc<dyn RatingApi>, advance_delay: Duration) -> Self {
        Self { api, advance_delay }
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn RatingApi> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    /// A fresh workflow in `Idle`, sharing this client.
    #[must_use]
    pub fn rating_workflow(&self) -> RatingWorkflow {
        RatingWorkflow::new(self.api()).with_advance_delay(self.advance_delay)
    }

    #[must_use]
    pub fn leaderboard_overlay(&self) -> LeaderboardOverlay {
        LeaderboardOverlay::new()
    }
}
