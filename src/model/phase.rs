//! Endpoint lifecycle phase.

use std::fmt;

use serde::Deserialize;

use super::EndpointRecord;

/// Lifecycle phase reported for an endpoint.
///
/// Known labels map to dedicated variants; anything else is kept verbatim in
/// [`Phase::Unrecognized`] so it can still be counted and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Phase {
    PendingAccept,
    Ready,
    Failed,
    Provisioning,
    Unrecognized(String),
}

impl Phase {
    /// Label used when the inventory omits the phase entirely.
    pub const UNKNOWN_LABEL: &'static str = "UNKNOWN";

    /// Returns the label as reported by the inventory.
    pub fn label(&self) -> &str {
        match self {
            Phase::PendingAccept => "PENDING_ACCEPT",
            Phase::Ready => "READY",
            Phase::Failed => "FAILED",
            Phase::Provisioning => "PROVISIONING",
            Phase::Unrecognized(raw) => raw,
        }
    }

    /// Single-cell status marker shown next to the label.
    pub fn icon(&self) -> &'static str {
        match self {
            Phase::PendingAccept => "…",
            Phase::Ready => "✔",
            Phase::Failed => "✘",
            Phase::Provisioning => "↻",
            Phase::Unrecognized(_) => "?",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Phase::Unrecognized(_))
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Unrecognized(Self::UNKNOWN_LABEL.to_string())
    }
}

impl From<&str> for Phase {
    fn from(raw: &str) -> Self {
        match raw {
            "PENDING_ACCEPT" => Phase::PendingAccept,
            "READY" => Phase::Ready,
            "FAILED" => Phase::Failed,
            "PROVISIONING" => Phase::Provisioning,
            other => Phase::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Phase {
    fn from(raw: String) -> Self {
        Phase::from(raw.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of records sharing one phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseCount {
    pub phase: Phase,
    pub count: usize,
}

/// Counts records per distinct phase, in first-seen order.
pub fn phase_counts(records: &[EndpointRecord]) -> Vec<PhaseCount> {
    let mut counts: Vec<PhaseCount> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|c| c.phase == record.phase) {
            Some(entry) => entry.count += 1,
            None => counts.push(PhaseCount {
                phase: record.phase.clone(),
                count: 1,
            }),
        }
    }
    counts
}
