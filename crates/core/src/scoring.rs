//! Final score computation.
//!
//! Each selected tag adds a fixed bonus on top of the base rating; the sum is
//! capped at [`MAX_SCORE`]. No lower bound is applied here: callers pass a
//! base rating that is already in range (see [`BaseRating`]).

use crate::model::{BaseRating, TagSet};

/// Bonus contributed by every selected tag.
pub const TAG_BONUS: f64 = 0.5;

/// Upper bound of a submitted score.
pub const MAX_SCORE: f64 = 10.0;

/// Result of combining a base rating with the tag bonus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalScore {
    pub score: f64,
    pub bonus: f64,
}

/// `min(10, base + 0.5 × tag_count)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_final_score(base_rating: f64, tag_count: usize) -> FinalScore {
    let bonus = tag_count as f64 * TAG_BONUS;
    FinalScore {
        score: (base_rating + bonus).min(MAX_SCORE),
        bonus,
    }
}

#[must_use]
pub fn score_for(base: BaseRating, tags: &TagSet) -> FinalScore {
    compute_final_score(base.value(), tags.len())
}
