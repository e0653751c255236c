use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validated tag name (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    /// Create a validated tag name.
    ///
    /// # Errors
    ///
    /// Returns `TagError::EmptyName` if the name is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TagError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TagError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TagName {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TagName> for String {
    fn from(tag: TagName) -> Self {
        tag.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TagError {
    #[error("tag name cannot be empty")]
    EmptyName,
}

/// Tags selected for the profile currently being rated.
///
/// Iteration follows selection order so submissions are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<TagName>,
}

impl TagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the tag if absent, deselect it otherwise.
    ///
    /// Returns `true` when the tag is selected after the call.
    pub fn toggle(&mut self, tag: TagName) -> bool {
        if let Some(pos) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(pos);
            false
        } else {
            self.tags.push(tag);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, tag: &TagName) -> bool {
        self.tags.contains(tag)
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagName> {
        self.tags.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<TagName> {
        self.tags.clone()
    }
}

impl FromIterator<TagName> for TagSet {
    fn from_iter<I: IntoIterator<Item = TagName>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            if !set.contains(&tag) {
                set.tags.push(tag);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> TagName {
        TagName::new(name).unwrap()
    }

    #[test]
    fn tag_name_is_trimmed() {
        assert_eq!(tag("  kind ").as_str(), "kind");
    }

    #[test]
    fn blank_tag_name_is_rejected() {
        assert_eq!(TagName::new(" \t").unwrap_err(), TagError::EmptyName);
    }

    #[test]
    fn toggle_twice_restores_previous_set() {
        let mut set: TagSet = [tag("funny")].into_iter().collect();
        let before = set.clone();

        assert!(set.toggle(tag("kind")));
        assert!(set.contains(&tag("kind")));
        assert!(!set.toggle(tag("kind")));

        assert_eq!(set, before);
    }

    #[test]
    fn iteration_keeps_selection_order() {
        let mut set = TagSet::new();
        set.toggle(tag("kind"));
        set.toggle(tag("funny"));
        set.toggle(tag("smart"));
        set.toggle(tag("funny"));

        let names: Vec<_> = set.iter().map(TagName::as_str).collect();
        assert_eq!(names, vec!["kind", "smart"]);
    }

    #[test]
    fn collecting_drops_duplicates() {
        let set: TagSet = [tag("kind"), tag("kind")].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
