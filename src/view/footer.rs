//! Footer band: refresh state, position and key legend.

use std::time::Instant;

use crate::tui::state::AppState;
use crate::util::{char_width, repeat_to_width};

use super::common::{DrawCommand, StyleClass};
use super::layout::ScreenLayout;

pub const CONTROLS: &str =
    "Controls: [r]Refresh [t]Toggle [↑↓]Navigate [PgUp/PgDn]Scroll [Home/End]Jump [q]Quit";

/// Refresh status line and its style.
pub fn refresh_status(state: &AppState, now: Instant) -> (String, StyleClass) {
    let refresh = &state.refresh;
    if !refresh.is_enabled() {
        return ("Auto-refresh: OFF".to_string(), StyleClass::Critical);
    }
    let remaining = refresh.seconds_until_next_refresh(now);
    if remaining > 0.0 {
        (
            format!("Auto-refresh: ON - next in {}s", remaining as u64),
            StyleClass::Active,
        )
    } else {
        (
            "Auto-refresh: ON - refreshing...".to_string(),
            StyleClass::Warning,
        )
    }
}

pub fn compose_footer(
    state: &AppState,
    layout: &ScreenLayout,
    now: Instant,
    out: &mut Vec<DrawCommand>,
) {
    let Some(footer) = layout.footer else {
        return;
    };

    out.push(DrawCommand::text(
        footer.rule_row,
        0,
        repeat_to_width('─', layout.width),
        StyleClass::Rule,
    ));

    let (status, style) = refresh_status(state, now);
    let status_len = char_width(&status);
    out.push(DrawCommand::text(footer.status_row, 0, status, style));

    let viewport = &state.viewport;
    if !viewport.is_empty() {
        let position = format!("row {}/{}", viewport.selected() + 1, viewport.len());
        let len = char_width(&position);
        // Only when it fits right of the status text with a gap.
        if usize::from(layout.width) >= status_len + 1 + len {
            let col = layout.width - len as u16;
            out.push(DrawCommand::text(
                footer.status_row,
                col,
                position,
                StyleClass::Dimmed,
            ));
        }
    }

    out.push(DrawCommand::text(
        footer.legend_row,
        0,
        CONTROLS,
        StyleClass::Normal,
    ));
}
