mod leaderboard;
mod my_profile;

pub use crate::error::QueryError;
pub use leaderboard::{ClickTarget, LeaderboardOverlay};
pub use my_profile::{ProfileSummary, load_my_profile};
