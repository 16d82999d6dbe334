//! Endpoint table band.

use crate::tui::state::AppState;
use crate::util::{repeat_to_width, truncate};

use super::common::{DrawCommand, StyleClass};
use super::layout::{Column, ScreenLayout};

pub const EMPTY_MESSAGE: &str = "No endpoints found";
pub const HEADINGS: [&str; 5] = ["Name", "ID", "Status", "IP Address", "Connection ID"];

const RULE_GLYPH: char = '─';

pub fn compose_table(state: &AppState, layout: &ScreenLayout, out: &mut Vec<DrawCommand>) {
    let viewport = &state.viewport;
    if viewport.is_empty() {
        out.push(DrawCommand::text(
            layout.table_header_row,
            2,
            EMPTY_MESSAGE,
            StyleClass::Critical,
        ));
        return;
    }

    for (column, heading) in layout.columns.all().iter().zip(HEADINGS) {
        out.push(DrawCommand::text(
            layout.table_header_row,
            column.x,
            truncate(heading, usize::from(column.width)),
            StyleClass::Heading,
        ));
    }
    out.push(DrawCommand::text(
        layout.table_header_row.saturating_add(1),
        0,
        repeat_to_width(RULE_GLYPH, layout.width),
        StyleClass::Rule,
    ));

    let columns = &layout.columns;
    let first = viewport.scroll_offset();
    for (i, record) in viewport.visible_slice(layout.visible_rows()).iter().enumerate() {
        let row = layout.table_start_row + i as u16;
        let reversed = first + i == viewport.selected();
        if reversed {
            out.push(
                DrawCommand::text(
                    row,
                    0,
                    repeat_to_width(' ', layout.width),
                    StyleClass::Normal,
                )
                .reversed(),
            );
        }

        let status = format!("{} {}", record.phase.icon(), record.phase.label());
        let cells = [
            (columns.name, record.name.as_str(), 0, StyleClass::Accent),
            (columns.id, record.id.as_str(), 1, StyleClass::Normal),
            (
                columns.status,
                status.as_str(),
                0,
                StyleClass::for_phase(&record.phase),
            ),
            (columns.ip, record.ip_address.as_str(), 0, StyleClass::Accent),
            (
                columns.connection,
                record.connection_id.as_str(),
                1,
                StyleClass::Normal,
            ),
        ];
        for (column, text, margin, style) in cells {
            if let Some(cmd) = cell(row, column, text, margin, style, reversed) {
                out.push(cmd);
            }
        }
    }
}

/// One cell, truncated to the column width minus `margin`.
fn cell(
    row: u16,
    column: Column,
    text: &str,
    margin: u16,
    style: StyleClass,
    reversed: bool,
) -> Option<DrawCommand> {
    let text = truncate(text, usize::from(column.width.saturating_sub(margin)));
    if text.is_empty() {
        return None;
    }
    let cmd = DrawCommand::text(row, column.x, text, style);
    Some(if reversed { cmd.reversed() } else { cmd })
}
