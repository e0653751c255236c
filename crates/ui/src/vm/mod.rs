mod leaderboard_vm;
mod profile_vm;
mod rating_vm;

pub use leaderboard_vm::{LeaderboardRowVm, LeaderboardVm, map_leaderboard};
pub use profile_vm::{ProfileCardVm, format_average, map_profile_card};
pub use rating_vm::{
    DEFAULT_TAG_CATALOG, PresetButtonVm, RatingPanelVm, TagChipVm, default_tag_catalog,
    map_rating_panel,
};
