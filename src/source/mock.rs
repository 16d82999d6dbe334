//! Scripted in-memory record source for testing.
//!
//! Lets the dashboard run without the Confluent CLI, and lets tests drive
//! record sets that grow, shrink or fail between refreshes.

use std::collections::VecDeque;

use super::{RecordSource, SourceError};
use crate::model::EndpointRecord;

/// Returns scripted results in order; the last one repeats forever.
#[derive(Debug, Clone)]
pub struct StaticSource {
    pending: VecDeque<Result<Vec<EndpointRecord>, SourceError>>,
    last: Result<Vec<EndpointRecord>, SourceError>,
    fetches: usize,
}

impl StaticSource {
    /// Always returns the same records.
    pub fn new(records: Vec<EndpointRecord>) -> Self {
        Self::script(vec![Ok(records)])
    }

    /// Returns each batch once, then keeps returning the final batch.
    pub fn sequence(batches: Vec<Vec<EndpointRecord>>) -> Self {
        Self::script(batches.into_iter().map(Ok).collect())
    }

    /// Always fails with `err`.
    pub fn failing(err: SourceError) -> Self {
        Self::script(vec![Err(err)])
    }

    /// Fully scripted results.
    pub fn script(results: Vec<Result<Vec<EndpointRecord>, SourceError>>) -> Self {
        let mut pending: VecDeque<_> = results.into();
        let last = pending.pop_back().unwrap_or_else(|| Ok(Vec::new()));
        Self {
            pending,
            last,
            fetches: 0,
        }
    }

    /// Generates `count` ready endpoints named `ep-1..=ep-count`.
    pub fn numbered(count: usize) -> Self {
        Self::new(numbered_records(count))
    }

    /// Number of fetches served so far.
    pub fn fetches(&self) -> usize {
        self.fetches
    }
}

impl RecordSource for StaticSource {
    fn try_fetch(&mut self) -> Result<Vec<EndpointRecord>, SourceError> {
        self.fetches += 1;
        match self.pending.pop_front() {
            Some(result) => result,
            None => self.last.clone(),
        }
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Builds `count` endpoints named `ep-1..=ep-count`, cycling through phases.
pub fn numbered_records(count: usize) -> Vec<EndpointRecord> {
    const PHASES: [&str; 4] = ["READY", "PENDING_ACCEPT", "PROVISIONING", "FAILED"];
    (1..=count)
        .map(|i| EndpointRecord {
            name: format!("ep-{}", i),
            id: format!("ap-{:06x}", i * 7919),
            phase: PHASES[(i - 1) % PHASES.len()].into(),
            ip_address: format!("10.0.{}.{}", i / 256, i % 256),
            connection_id: format!("{}", 4_000_000_000_u64 + i as u64),
        })
        .collect()
}
