//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use rate_core::model::RatingError;

/// Message used when a failed response carries no `error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "request failed";

/// Errors emitted by the request client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RequestError {
    #[error("{message} (status {status})")]
    Status { status: StatusCode, message: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RequestError {
    /// User-presentable message: the backend's `error` text when it sent one.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Http(_) | Self::Decode(_) => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status(),
            Self::Decode(_) => None,
        }
    }
}

/// Errors emitted by `RatingWorkflow`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WorkflowError {
    #[error("no profile loaded")]
    NoProfile,
    #[error("a rating is already being submitted")]
    SubmitInFlight,
    #[error("unknown rating preset {0}")]
    UnknownPreset(usize),
    #[error(transparent)]
    Rating(#[from] RatingError),
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl WorkflowError {
    /// True for local invariant violations that never reached the network.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Self::Request(_))
    }
}

/// Errors emitted by the read-only query views.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QueryError {
    #[error("no personal profile exists yet")]
    NoPersonalProfile,
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Errors emitted while reading client configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base URL: {raw}")]
    InvalidBaseUrl { raw: String },
    #[error("invalid {name} value: {raw}")]
    InvalidNumber { name: &'static str, raw: String },
}
