mod ids;
mod leaderboard;
mod profile;
mod rating;
mod submission;
mod tag;

pub use ids::{ProfileId, ProfileIdError};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use profile::Profile;
pub use rating::{BaseRating, DEFAULT_PRESET_VALUES, RatingError, RatingPresets};
pub use submission::RatingSubmission;
pub use tag::{TagError, TagName, TagSet};
