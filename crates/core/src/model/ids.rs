use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Backend identifier for a profile.
///
/// Opaque to the client: it is only ever echoed back in rating submissions.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileId(String);

impl ProfileId {
    /// Creates a new `ProfileId`.
    ///
    /// # Errors
    ///
    /// Returns `ProfileIdError::Empty` if the value is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ProfileIdError> {
        let raw = id.into();
        if raw.trim().is_empty() {
            return Err(ProfileIdError::Empty);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileIdError {
    #[error("profile id cannot be empty")]
    Empty,
}

impl TryFrom<String> for ProfileId {
    type Error = ProfileIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProfileId> for String {
    fn from(id: ProfileId) -> Self {
        id.0
    }
}

impl fmt::Debug for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProfileId({})", self.0)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProfileId {
    type Err = ProfileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_id_display() {
        let id = ProfileId::new("64f0c2").unwrap();
        assert_eq!(id.to_string(), "64f0c2");
    }

    #[test]
    fn test_profile_id_from_str_blank() {
        let result = "   ".parse::<ProfileId>();
        assert_eq!(result.unwrap_err(), ProfileIdError::Empty);
    }

    #[test]
    fn test_profile_id_deserialize_rejects_empty() {
        let result = serde_json::from_str::<ProfileId>("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_id_serializes_as_plain_string() {
        let id = ProfileId::new("P1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"P1\"");
    }
}
