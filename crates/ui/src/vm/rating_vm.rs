use rate_core::model::{RatingPresets, TagName};
use rate_core::score_for;
use services::{SessionState, WorkflowState};

/// Tags offered on the rating screen.
pub const DEFAULT_TAG_CATALOG: [&str; 6] =
    ["kind", "funny", "smart", "stylish", "sporty", "creative"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagChipVm {
    pub name: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetButtonVm {
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingPanelVm {
    pub readout: String,
    pub presets: Vec<PresetButtonVm>,
    pub tags: Vec<TagChipVm>,
    pub final_score_label: String,
    pub submit_enabled: bool,
}

#[must_use]
pub fn map_rating_panel(
    session: &SessionState,
    presets: &RatingPresets,
    catalog: &[TagName],
    state: WorkflowState,
) -> RatingPanelVm {
    let presets = presets
        .iter()
        .enumerate()
        .map(|(index, rating)| PresetButtonVm {
            label: format!("{:.0}", rating.value()),
            active: session.active_preset() == Some(index),
        })
        .collect();

    let tags = catalog
        .iter()
        .map(|tag| TagChipVm {
            name: tag.as_str().to_string(),
            active: session.selected_tags().contains(tag),
        })
        .collect();

    let final_score = score_for(session.base_rating(), session.selected_tags());
    let final_score_label = if final_score.bonus > 0.0 {
        format!("{:.1} (+{:.1})", final_score.score, final_score.bonus)
    } else {
        format!("{:.1}", final_score.score)
    };

    RatingPanelVm {
        readout: session.readout(),
        presets,
        tags,
        final_score_label,
        submit_enabled: state == WorkflowState::ProfileLoaded,
    }
}

/// The catalog as validated tag names.
#[must_use]
pub fn default_tag_catalog() -> Vec<TagName> {
    DEFAULT_TAG_CATALOG
        .iter()
        .filter_map(|name| TagName::new(*name).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_panel() {
        let panel = map_rating_panel(
            &SessionState::new(),
            &RatingPresets::default(),
            &default_tag_catalog(),
            WorkflowState::Idle,
        );

        assert_eq!(panel.readout, "5.0");
        assert_eq!(panel.final_score_label, "5.0");
        assert!(panel.presets.iter().all(|p| !p.active));
        assert!(panel.tags.iter().all(|t| !t.active));
        assert_eq!(panel.tags.len(), DEFAULT_TAG_CATALOG.len());
        assert!(!panel.submit_enabled);
    }

    #[test]
    fn preset_labels_are_whole_numbers() {
        let panel = map_rating_panel(
            &SessionState::new(),
            &RatingPresets::default(),
            &[],
            WorkflowState::ProfileLoaded,
        );
        let labels: Vec<_> = panel.presets.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2", "4", "6", "8", "10"]);
        assert!(panel.submit_enabled);
    }
}
