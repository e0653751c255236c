use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum RatingError {
    #[error("rating must be a finite number, got {0}")]
    NotFinite(f64),
}

/// The user-chosen score before any tag bonus, always within `[1.0, 10.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct BaseRating(f64);

impl BaseRating {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 10.0;
    pub const DEFAULT: f64 = 5.0;
    /// Increment applied by the thumbs up/down actions.
    pub const STEP: f64 = 1.0;

    /// Build a rating from raw input, clamping it into range.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::NotFinite` for NaN or infinite input.
    pub fn clamped(value: f64) -> Result<Self, RatingError> {
        if !value.is_finite() {
            return Err(RatingError::NotFinite(value));
        }
        Ok(Self(value.clamp(Self::MIN, Self::MAX)))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn step_up(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    #[must_use]
    pub fn step_down(self) -> Self {
        Self((self.0 - Self::STEP).max(Self::MIN))
    }
}

impl Default for BaseRating {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for BaseRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Values offered by the quick-pick rating buttons.
pub const DEFAULT_PRESET_VALUES: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

/// Ordered set of quick-pick ratings, addressed by button index.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingPresets {
    values: Vec<BaseRating>,
}

impl RatingPresets {
    /// # Errors
    ///
    /// Returns `RatingError::NotFinite` if any value is not a finite number.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Result<Self, RatingError> {
        let values = values
            .into_iter()
            .map(BaseRating::clamped)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { values })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<BaseRating> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = BaseRating> + '_ {
        self.values.iter().copied()
    }
}

impl Default for RatingPresets {
    fn default() -> Self {
        Self {
            values: DEFAULT_PRESET_VALUES.iter().map(|v| BaseRating(*v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five() {
        assert_eq!(BaseRating::default().value(), 5.0);
        assert_eq!(BaseRating::default().to_string(), "5.0");
    }

    #[test]
    fn raw_input_is_clamped_into_range() {
        assert_eq!(BaseRating::clamped(0.2).unwrap().value(), 1.0);
        assert_eq!(BaseRating::clamped(12.0).unwrap().value(), 10.0);
        assert_eq!(BaseRating::clamped(7.3).unwrap().value(), 7.3);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert!(BaseRating::clamped(f64::NAN).is_err());
        assert!(BaseRating::clamped(f64::INFINITY).is_err());
    }

    #[test]
    fn steps_saturate_at_bounds() {
        let floor = BaseRating::clamped(1.0).unwrap();
        assert_eq!(floor.step_down().value(), 1.0);

        let near_top = BaseRating::clamped(9.5).unwrap();
        assert_eq!(near_top.step_up().value(), 10.0);
        assert_eq!(near_top.step_up().step_up().value(), 10.0);

        assert_eq!(BaseRating::default().step_up().value(), 6.0);
    }

    #[test]
    fn presets_are_indexed_by_position() {
        let presets = RatingPresets::default();
        assert_eq!(presets.len(), DEFAULT_PRESET_VALUES.len());
        assert_eq!(presets.get(0).map(BaseRating::value), Some(2.0));
        assert_eq!(presets.get(4).map(BaseRating::value), Some(10.0));
        assert!(presets.get(5).is_none());
    }
}
