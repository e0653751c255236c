use crate::model::Profile;

/// One row of the top-rated list.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// 1-based position in the list.
    pub rank: usize,
    pub name: String,
    pub photo_url: String,
    pub average_rating: Option<f64>,
    pub total_ratings: u64,
}

/// Ranked list of top profiles, in the order the backend returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn from_profiles(profiles: Vec<Profile>) -> Self {
        let entries = profiles
            .into_iter()
            .enumerate()
            .map(|(index, profile)| LeaderboardEntry {
                rank: index + 1,
                name: profile.name().to_string(),
                photo_url: profile.photo_url().to_string(),
                average_rating: profile.average_rating(),
                total_ratings: profile.total_ratings(),
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
