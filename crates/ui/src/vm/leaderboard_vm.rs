use rate_core::model::Leaderboard;

use crate::messages::TOP_EMPTY;
use super::profile_vm::format_average;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub rank_label: String,
    pub name: String,
    pub photo_url: String,
    pub rating_label: String,
    pub count_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeaderboardVm {
    Empty { placeholder: &'static str },
    Rows(Vec<LeaderboardRowVm>),
}

#[must_use]
pub fn map_leaderboard(board: &Leaderboard) -> LeaderboardVm {
    if board.is_empty() {
        return LeaderboardVm::Empty {
            placeholder: TOP_EMPTY,
        };
    }

    let rows = board
        .entries()
        .iter()
        .map(|entry| LeaderboardRowVm {
            rank_label: entry.rank.to_string(),
            name: entry.name.clone(),
            photo_url: entry.photo_url.clone(),
            rating_label: format!("⭐ {}", format_average(entry.average_rating)),
            count_label: format!("{} ratings", entry.total_ratings),
        })
        .collect();
    LeaderboardVm::Rows(rows)
}
