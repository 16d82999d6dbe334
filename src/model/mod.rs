//! Endpoint inventory data model.
//!
//! Records are immutable snapshots: a refresh replaces the whole collection,
//! individual records are never patched in place.

mod endpoint;
mod phase;

pub use endpoint::{EndpointRecord, NO_SORT_KEY, decode_records, name_sort_key, sort_records};
pub use phase::{Phase, PhaseCount, phase_counts};
