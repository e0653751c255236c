use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use tracing::{debug, warn};

use rate_core::model::{Profile, RatingSubmission};

use super::{Endpoint, RatingApi};
use crate::config::ClientConfig;
use crate::error::{FALLBACK_ERROR_MESSAGE, RequestError};

/// Header carrying the host-provided identity token.
pub const IDENTITY_HEADER: &str = "X-Telegram-Init-Data";

/// Supplies the identity token. Read again for every request.
pub type TokenSource = Arc<dyn Fn() -> String + Send + Sync>;

/// `RatingApi` over JSON/HTTP.
#[derive(Clone)]
pub struct HttpRatingApi {
    client: Client,
    base_url: String,
    token: TokenSource,
}

impl HttpRatingApi {
    /// Client sending the fixed token from `config`.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, RequestError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().to_string(),
            token: fixed_token(config.identity_token()),
        })
    }

    /// Take the token from `source` instead of the configuration.
    #[must_use]
    pub fn with_token_source(mut self, source: TokenSource) -> Self {
        self.token = source;
        self
    }

    fn request(&self, method: Method, endpoint: Endpoint) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint.path());
        self.client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(IDENTITY_HEADER, (self.token)())
    }

    /// Send the request and hand back the body of a successful response.
    async fn call(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<String, RequestError> {
        debug!(endpoint = endpoint.path(), "calling backend");

        let response = request.send().await.inspect_err(|err| {
            warn!(endpoint = endpoint.path(), error = %err, "backend unreachable");
        })?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body);
            warn!(endpoint = endpoint.path(), %status, %message, "backend returned an error");
            return Err(RequestError::Status { status, message });
        }

        Ok(body)
    }
}

#[async_trait]
impl RatingApi for HttpRatingApi {
    async fn random_profile(&self) -> Result<Profile, RequestError> {
        let endpoint = Endpoint::RandomProfile;
        let body = self.call(endpoint, self.request(Method::GET, endpoint)).await?;
        let envelope: ProfileEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.profile)
    }

    async fn rate(&self, submission: &RatingSubmission) -> Result<(), RequestError> {
        let endpoint = Endpoint::Rate;
        let request = self.request(Method::POST, endpoint).json(submission);
        self.call(endpoint, request).await?;
        Ok(())
    }

    async fn my_profile(&self) -> Result<Profile, RequestError> {
        let endpoint = Endpoint::MyProfile;
        let body = self.call(endpoint, self.request(Method::GET, endpoint)).await?;
        let envelope: ProfileEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.profile)
    }

    async fn top_five(&self) -> Result<Vec<Profile>, RequestError> {
        let endpoint = Endpoint::TopFive;
        let body = self.call(endpoint, self.request(Method::GET, endpoint)).await?;
        let envelope: TopUsersEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.top_users)
    }
}

fn fixed_token(token: &str) -> TokenSource {
    let token = token.to_string();
    Arc::new(move || token.clone())
}

/// Extract `{ "error": "..." }` from a failed response, if present.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    profile: Profile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopUsersEnvelope {
    top_users: Vec<Profile>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_backend_text() {
        assert_eq!(error_message(r#"{"error":"already rated"}"#), "already rated");
    }

    #[test]
    fn error_message_falls_back() {
        assert_eq!(error_message("{}"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(error_message(r#"{"error":""}"#), FALLBACK_ERROR_MESSAGE);
        assert_eq!(error_message("<html>502</html>"), FALLBACK_ERROR_MESSAGE);
    }
}
