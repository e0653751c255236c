#![forbid(unsafe_code)]

pub mod model;
pub mod scoring;

pub use scoring::{FinalScore, MAX_SCORE, TAG_BONUS, compute_final_score, score_for};
