//! UI-agnostic frame composition.
//!
//! [`compose`] turns the current state and a [`layout::ScreenLayout`] into an
//! ordered list of [`DrawCommand`]s. It never touches the terminal, so a frame
//! can be inspected in tests; the TUI flushes the commands into ratatui.

pub mod common;
mod footer;
pub mod layout;
mod summary;
mod table;

pub use common::{DrawCommand, StyleClass};
pub use footer::{CONTROLS, refresh_status};
pub use layout::{ScreenLayout, SummaryMode, compute_layout};
pub use table::{EMPTY_MESSAGE, HEADINGS};

use std::time::Instant;

use crate::model::phase_counts;
use crate::tui::state::AppState;

/// Layout for the current snapshot on a `width` × `height` terminal.
pub fn layout_for(state: &AppState, width: u16, height: u16) -> ScreenLayout {
    let records = state.viewport.records();
    compute_layout(width, height, records.len(), phase_counts(records).len())
}

/// Builds the draw commands for one frame: summary band, table band, footer.
pub fn compose(state: &AppState, layout: &ScreenLayout, now: Instant) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(8 + 6 * layout.visible_rows());
    summary::compose_summary(state, layout, &mut out);
    table::compose_table(state, layout, &mut out);
    footer::compose_footer(state, layout, now, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EndpointRecord, Phase};
    use crate::source::mock::numbered_records;
    use chrono::Local;
    use std::time::Duration;

    /// Paints commands onto a char grid, clipping at the edges.
    fn screen(commands: &[DrawCommand], width: u16, height: u16) -> Vec<String> {
        let mut grid = vec![vec![' '; usize::from(width)]; usize::from(height)];
        for cmd in commands {
            let Some(line) = grid.get_mut(usize::from(cmd.row)) else {
                continue;
            };
            for (i, ch) in cmd.text.chars().enumerate() {
                if let Some(cell) = line.get_mut(usize::from(cmd.col) + i) {
                    *cell = ch;
                }
            }
        }
        grid.into_iter()
            .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    fn state_with(records: Vec<EndpointRecord>, visible_rows: usize) -> AppState {
        let mut state = AppState::new(Instant::now());
        state.set_visible_rows(visible_rows);
        state.apply_records(records, Local::now());
        state
    }

    fn frame(state: &mut AppState, width: u16, height: u16) -> (ScreenLayout, Vec<DrawCommand>) {
        let layout = layout_for(state, width, height);
        state.set_visible_rows(layout.visible_rows());
        let commands = compose(state, &layout, Instant::now());
        (layout, commands)
    }

    #[test]
    fn empty_snapshot_renders_notice_header_and_footer() {
        let mut state = state_with(Vec::new(), 10);
        let (layout, commands) = frame(&mut state, 100, 24);
        let lines = screen(&commands, 100, 24);

        assert!(lines[0].contains("CONFLUENT ENDPOINTS (0 total)"));
        assert!(lines[1].contains("Last updated: "));
        assert_eq!(
            lines[usize::from(layout.table_header_row)].trim(),
            EMPTY_MESSAGE
        );
        assert_eq!(lines[22], "Auto-refresh: OFF");
        assert_eq!(lines[23], CONTROLS);
        assert!(commands.iter().all(|c| !c.reversed));
    }

    #[test]
    fn summary_lists_phases_in_first_seen_order() {
        let mut records = numbered_records(8);
        records[0].phase = Phase::Failed;
        let mut state = state_with(records, 10);
        let (_, commands) = frame(&mut state, 100, 30);
        let lines = screen(&commands, 100, 30);

        // Sorted snapshot: ep-1 FAILED, ep-2 PENDING, ep-3 PROVISIONING, ep-4 FAILED, ep-5 READY...
        assert!(lines[3].starts_with("  ✘ FAILED"));
        assert!(lines[3].ends_with("  3 █"));
        assert!(lines[4].starts_with("  … PENDING_ACCEPT"));
        assert!(lines[5].starts_with("  ↻ PROVISIONING"));
        assert!(lines[6].starts_with("  ✔ READY"));
        assert_eq!(lines[7], "");
    }

    #[test]
    fn phase_rows_use_phase_styles() {
        let mut state = state_with(numbered_records(4), 10);
        let (_, commands) = frame(&mut state, 100, 30);
        let ready = commands
            .iter()
            .find(|c| c.row == 3 && c.text.contains("READY"))
            .unwrap();
        assert_eq!(ready.style, StyleClass::Active);
    }

    #[test]
    fn table_rows_follow_scroll_window() {
        let mut state = state_with(numbered_records(25), 10);
        let (layout, _) = frame(&mut state, 120, 24);
        let rows = layout.visible_rows();
        assert!(rows > 0 && rows < 25);

        state.viewport.jump_to_end(rows);
        let (layout, commands) = frame(&mut state, 120, 24);
        let lines = screen(&commands, 120, 24);

        let start = usize::from(layout.table_start_row);
        assert!(lines[start].starts_with(&format!("ep-{}", 25 - rows + 1)));
        assert!(lines[start + rows - 1].starts_with("ep-25"));
        assert!(lines[usize::from(layout.table_header_row)].starts_with("Name"));
        assert!(lines[usize::from(layout.table_header_row) + 1].starts_with("───"));
    }

    #[test]
    fn selected_row_is_reversed_across_width() {
        let mut state = state_with(numbered_records(5), 10);
        state.viewport.move_selection(2, 10);
        let (layout, commands) = frame(&mut state, 90, 24);

        let selected_row = layout.table_start_row + 2;
        let reversed: Vec<&DrawCommand> = commands.iter().filter(|c| c.reversed).collect();
        assert!(!reversed.is_empty());
        assert!(reversed.iter().all(|c| c.row == selected_row));
        assert!(reversed.iter().any(|c| c.col == 0 && c.text.len() == 90));
        assert!(reversed.iter().any(|c| c.text == "ep-3"));
    }

    #[test]
    fn cells_are_truncated_to_columns() {
        let record = EndpointRecord {
            name: "an-extremely-long-endpoint-name-1".to_string(),
            id: "ap-0123456789abcdefghij".to_string(),
            phase: Phase::Ready,
            ip_address: "10.100.200.250".to_string(),
            connection_id: "9".repeat(40),
        };
        let mut state = state_with(vec![record], 10);
        let (layout, commands) = frame(&mut state, 100, 24);
        let row = layout.table_start_row;
        let cells: Vec<&DrawCommand> = commands
            .iter()
            .filter(|c| c.row == row && !c.text.trim().is_empty())
            .collect();

        let name = cells.iter().find(|c| c.col == layout.columns.name.x).unwrap();
        assert_eq!(name.text, "an-extremely");
        let id = cells.iter().find(|c| c.col == layout.columns.id.x).unwrap();
        assert_eq!(id.text.chars().count(), 14);
        let conn = cells
            .iter()
            .find(|c| c.col == layout.columns.connection.x)
            .unwrap();
        assert_eq!(conn.text.chars().count(), 30);
    }

    #[test]
    fn footer_countdown_states() {
        let t = Instant::now();
        let mut state = state_with(numbered_records(3), 10);

        state.refresh.toggle(t);
        let (text, style) = refresh_status(&state, t + Duration::from_millis(3_500));
        assert_eq!(text, "Auto-refresh: ON - next in 11s");
        assert_eq!(style, StyleClass::Active);

        let (text, style) = refresh_status(&state, t + Duration::from_secs(15));
        assert_eq!(text, "Auto-refresh: ON - refreshing...");
        assert_eq!(style, StyleClass::Warning);

        state.refresh.toggle(t);
        let (text, style) = refresh_status(&state, t);
        assert_eq!(text, "Auto-refresh: OFF");
        assert_eq!(style, StyleClass::Critical);
    }

    #[test]
    fn footer_shows_position() {
        let mut state = state_with(numbered_records(25), 10);
        state.viewport.move_selection(6, 10);
        let (_, commands) = frame(&mut state, 100, 24);
        let lines = screen(&commands, 100, 24);
        assert!(lines[22].ends_with("row 7/25"));
    }

    #[test]
    fn compact_summary_on_short_terminal() {
        let mut state = state_with(numbered_records(12), 10);
        let (layout, commands) = frame(&mut state, 120, 12);
        assert_eq!(layout.summary, SummaryMode::Compact);

        let lines = screen(&commands, 120, 12);
        assert!(lines[0].starts_with("12 endpoints | updated "));
        assert!(lines[0].contains("| READY 3"));
        assert!(lines[1].starts_with("Name"));
    }

    #[test]
    fn degenerate_sizes_do_not_panic() {
        for (width, height) in [(0, 0), (1, 1), (5, 2), (10, 3), (200, 4), (3, 60)] {
            let mut state = state_with(numbered_records(40), 10);
            state.viewport.jump_to_end(10);
            let (layout, commands) = frame(&mut state, width, height);
            assert!(layout.visible_rows() <= usize::from(height));
            let table_rows = commands
                .iter()
                .filter(|c| c.row >= layout.table_start_row && c.text.starts_with("ep-"))
                .count();
            assert!(table_rows <= layout.visible_rows());
        }
    }
}
