//! Status summary band.

use crate::model::phase_counts;
use crate::tui::state::AppState;
use crate::util::{bar, centered_col};

use super::common::{DrawCommand, StyleClass};
use super::layout::{ScreenLayout, SummaryMode};

/// First phase row inside the full band (after title, time and a blank row).
const PHASE_ROW_OFFSET: u16 = 3;
const PHASE_COL: u16 = 2;

pub fn compose_summary(state: &AppState, layout: &ScreenLayout, out: &mut Vec<DrawCommand>) {
    if layout.summary_height == 0 {
        return;
    }

    let records = state.viewport.records();
    let counts = phase_counts(records);
    let updated = state.refresh.last_data_update().format("%H:%M:%S").to_string();

    match layout.summary {
        SummaryMode::Full { phase_rows } => {
            let title = format!("CONFLUENT ENDPOINTS ({} total)", records.len());
            out.push(DrawCommand::text(
                0,
                centered_col(&title, layout.width),
                title,
                StyleClass::Title,
            ));

            let time = format!("Last updated: {}", updated);
            out.push(DrawCommand::text(
                1,
                centered_col(&time, layout.width),
                time,
                StyleClass::Normal,
            ));

            for (i, entry) in counts.iter().take(usize::from(phase_rows)).enumerate() {
                let line = format!(
                    "{} {:<15} {:>3} {}",
                    entry.phase.icon(),
                    entry.phase.label(),
                    entry.count,
                    bar(entry.count)
                );
                out.push(DrawCommand::text(
                    PHASE_ROW_OFFSET + i as u16,
                    PHASE_COL,
                    line,
                    StyleClass::for_phase(&entry.phase),
                ));
            }
        }
        SummaryMode::Compact => {
            let mut line = format!("{} endpoints | updated {}", records.len(), updated);
            for entry in &counts {
                line.push_str(&format!(" | {} {}", entry.phase.label(), entry.count));
            }
            out.push(DrawCommand::text(0, 0, line, StyleClass::Title));
        }
    }
}
