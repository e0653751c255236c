use rate_core::model::{BaseRating, Profile, TagName, TagSet};

/// Everything the user has chosen for the profile on screen.
///
/// Tags, base rating and the active preset mark only ever reset together,
/// when a new profile is loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    current_profile: Option<Profile>,
    selected_tags: TagSet,
    base_rating: BaseRating,
    active_preset: Option<usize>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_profile(&self) -> Option<&Profile> {
        self.current_profile.as_ref()
    }

    #[must_use]
    pub fn selected_tags(&self) -> &TagSet {
        &self.selected_tags
    }

    #[must_use]
    pub fn base_rating(&self) -> BaseRating {
        self.base_rating
    }

    /// Index of the quick-pick button currently marked, if any.
    #[must_use]
    pub fn active_preset(&self) -> Option<usize> {
        self.active_preset
    }

    /// Numeric readout shown next to the rating controls.
    #[must_use]
    pub fn readout(&self) -> String {
        self.base_rating.to_string()
    }

    pub(crate) fn load(&mut self, profile: Profile) {
        self.current_profile = Some(profile);
        self.selected_tags.clear();
        self.base_rating = BaseRating::default();
        self.active_preset = None;
    }

    pub(crate) fn toggle_tag(&mut self, tag: TagName) -> bool {
        self.selected_tags.toggle(tag)
    }

    /// Slider input and thumbs steps: drops any preset mark.
    pub(crate) fn set_base_rating(&mut self, rating: BaseRating) {
        self.base_rating = rating;
        self.active_preset = None;
    }

    pub(crate) fn select_preset(&mut self, index: usize, rating: BaseRating) {
        self.base_rating = rating;
        self.active_preset = Some(index);
    }
}
