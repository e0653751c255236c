use std::fmt::Write as _;

use ui::vm::{LeaderboardVm, ProfileCardVm, RatingPanelVm};

/// Plain-text rendering of the current screen.
pub fn render_screen(
    card: Option<&ProfileCardVm>,
    panel: &RatingPanelVm,
    leaderboard: Option<&LeaderboardVm>,
) -> String {
    let mut out = String::new();

    if let Some(board) = leaderboard {
        out.push_str(&render_leaderboard(board));
        out.push_str("(close | outside)\n");
        return out;
    }

    match card {
        Some(card) => {
            let _ = writeln!(out, "── {} ── ⭐ {}", card.name, card.average_label);
            if !card.photo_url.is_empty() {
                let _ = writeln!(out, "   {}", card.photo_url);
            }
        }
        None => out.push_str("── no profile ── (next)\n"),
    }

    let tags = panel
        .tags
        .iter()
        .map(|tag| {
            if tag.active {
                format!("[{}]", tag.name)
            } else {
                tag.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let presets = panel
        .presets
        .iter()
        .map(|preset| {
            if preset.active {
                format!("[{}]", preset.label)
            } else {
                preset.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let _ = writeln!(out, "rating {}  presets {}", panel.readout, presets);
    let _ = writeln!(out, "tags   {tags}");
    let submit = if panel.submit_enabled { "" } else { " (unavailable)" };
    let _ = writeln!(out, "final  {}{submit}", panel.final_score_label);
    out
}

fn render_leaderboard(board: &LeaderboardVm) -> String {
    let mut out = String::from("── top 5 ──\n");
    match board {
        LeaderboardVm::Empty { placeholder } => {
            let _ = writeln!(out, "   {placeholder}");
        }
        LeaderboardVm::Rows(rows) => {
            for row in rows {
                let _ = writeln!(
                    out,
                    "{:>2}. {}  {}  {}",
                    row.rank_label, row.name, row.rating_label, row.count_label
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::vm::{PresetButtonVm, TagChipVm};

    fn panel() -> RatingPanelVm {
        RatingPanelVm {
            readout: "6.0".into(),
            presets: vec![
                PresetButtonVm { label: "2".into(), active: false },
                PresetButtonVm { label: "6".into(), active: true },
            ],
            tags: vec![
                TagChipVm { name: "kind".into(), active: true },
                TagChipVm { name: "funny".into(), active: false },
            ],
            final_score_label: "6.5 (+0.5)".into(),
            submit_enabled: true,
        }
    }

    #[test]
    fn marks_active_controls() {
        let text = render_screen(None, &panel(), None);
        assert!(text.contains("rating 6.0  presets 2 [6]"));
        assert!(text.contains("tags   [kind] funny"));
        assert!(text.contains("final  6.5 (+0.5)\n"));
    }

    #[test]
    fn overlay_replaces_screen() {
        let board = LeaderboardVm::Empty { placeholder: "nobody yet" };
        let text = render_screen(None, &panel(), Some(&board));
        assert!(text.contains("nobody yet"));
        assert!(!text.contains("presets"));
    }
}
