#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod config;
pub mod error;
pub mod host;
pub mod queries;
pub mod rating;

pub use api::{Endpoint, HttpRatingApi, InMemoryRatingApi, RatingApi, TokenSource};
pub use app_services::AppServices;
pub use config::ClientConfig;
pub use error::{ConfigError, QueryError, RequestError, WorkflowError};
pub use host::{HostShell, host_token_source};

pub use queries::{ClickTarget, LeaderboardOverlay, ProfileSummary, load_my_profile};
pub use rating::{
    AdvanceOutcome, RatingWorkflow, ScheduledAdvance, SessionState, SubmitConfirmation,
    WorkflowState,
};
