//! Selection cursor and scroll window over the record list.

use crate::model::{EndpointRecord, sort_records};

/// Rows moved by PageUp/PageDown.
pub const PAGE_STEP: isize = 10;

/// Ordered record list with a selection cursor and a scroll window.
///
/// Invariants, whenever `records` is non-empty:
/// - `selected < records.len()`
/// - `scroll_offset <= records.len() - 1`
/// - after any mutation taking `visible_rows`, the window
///   `[scroll_offset, scroll_offset + visible_rows)` contains `selected`.
///
/// With no records both indices are 0.
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    records: Vec<EndpointRecord>,
    selected: usize,
    scroll_offset: usize,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[EndpointRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn selected_record(&self) -> Option<&EndpointRecord> {
        self.records.get(self.selected)
    }

    /// Replaces the whole collection with a freshly sorted snapshot.
    ///
    /// Selection and offset keep their numeric values and are then clamped
    /// into the new range, so a shrinking collection never leaves them dangling.
    pub fn load(&mut self, mut records: Vec<EndpointRecord>, visible_rows: usize) {
        sort_records(&mut records);
        self.records = records;
        self.selected = self.selected.min(self.records.len().saturating_sub(1));
        self.reconcile(visible_rows);
    }

    /// Moves the cursor by `delta` rows, clamped to the collection.
    pub fn move_selection(&mut self, delta: isize, visible_rows: usize) {
        if self.records.is_empty() {
            return;
        }
        let last = self.records.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self.reconcile(visible_rows);
    }

    pub fn jump_to_start(&mut self, visible_rows: usize) {
        self.selected = 0;
        self.scroll_offset = 0;
        self.reconcile(visible_rows);
    }

    pub fn jump_to_end(&mut self, visible_rows: usize) {
        self.selected = self.records.len().saturating_sub(1);
        self.reconcile(visible_rows);
    }

    /// Re-derives the scroll offset for the current selection.
    pub fn reconcile(&mut self, visible_rows: usize) {
        self.scroll_offset = reconcile_scroll(
            self.selected,
            self.scroll_offset,
            visible_rows,
            self.records.len(),
        );
    }

    /// Records inside the scroll window, truncated at the collection end.
    pub fn visible_slice(&self, visible_rows: usize) -> &[EndpointRecord] {
        let start = self.scroll_offset.min(self.records.len());
        let end = start.saturating_add(visible_rows).min(self.records.len());
        &self.records[start..end]
    }

    /// Returns true if `selected` lies inside the window for `visible_rows`.
    pub fn selection_visible(&self, visible_rows: usize) -> bool {
        self.selected >= self.scroll_offset
            && self.selected < self.scroll_offset.saturating_add(visible_rows)
    }
}

/// Scroll offset that keeps `selected` inside a window of `visible_rows`.
///
/// Pure and idempotent. A zero-row window is treated as one row so the
/// offset still follows the selection on a degenerate terminal.
pub fn reconcile_scroll(selected: usize, offset: usize, visible_rows: usize, len: usize) -> usize {
    let rows = visible_rows.max(1);
    let mut offset = offset;
    if selected < offset {
        offset = selected;
    } else if selected >= offset + rows {
        offset = selected + 1 - rows;
    }
    offset.min(len.saturating_sub(1))
}
