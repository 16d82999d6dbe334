//! Application state management.
//!
//! All mutable dashboard state lives here as plain structs so every
//! transition can be exercised without a terminal.

mod refresh;
mod viewport;

pub use refresh::{REFRESH_INTERVAL, RefreshScheduler};
pub use viewport::{PAGE_STEP, ViewportState, reconcile_scroll};

use std::time::Instant;

use chrono::{DateTime, Local};

use crate::model::EndpointRecord;

/// Main application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Records, selection and scroll window.
    pub viewport: ViewportState,
    /// Auto-refresh flag and timestamps.
    pub refresh: RefreshScheduler,
    /// Table rows available in the most recently computed layout.
    pub visible_rows: usize,
}

impl AppState {
    pub fn new(now: Instant) -> Self {
        Self {
            viewport: ViewportState::new(),
            refresh: RefreshScheduler::new(now),
            visible_rows: 0,
        }
    }

    /// Atomically swaps in a freshly fetched snapshot.
    pub fn apply_records(&mut self, records: Vec<EndpointRecord>, updated_at: DateTime<Local>) {
        self.viewport.load(records, self.visible_rows);
        self.refresh.mark_data_updated(updated_at);
    }

    /// Updates the window height after a layout pass and re-derives the scroll offset.
    pub fn set_visible_rows(&mut self, rows: usize) {
        self.visible_rows = rows;
        self.viewport.reconcile(rows);
    }
}
