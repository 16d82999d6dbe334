//! Record source abstraction for the endpoint inventory.
//!
//! This module defines the `RecordSource` trait that lets the dashboard work
//! with different inventories through a unified interface:
//! - `CommandSource`: runs the Confluent CLI and decodes its JSON output
//! - `FileSource`: reads the same JSON shape from a file
//! - `StaticSource`: scripted in-memory batches for tests and demos

mod command;
mod file;
pub mod mock;

pub use command::CommandSource;
pub use file::FileSource;
pub use mock::StaticSource;

use tracing::warn;

use crate::model::EndpointRecord;

/// Error types that can occur while fetching records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The external command could not be started.
    Spawn(String),
    /// The external command exited unsuccessfully.
    Exit { status: String, stderr: String },
    /// I/O error while reading input.
    Io(String),
    /// Output was not a valid endpoint list.
    Decode(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Spawn(msg) => write!(f, "Spawn error: {}", msg),
            SourceError::Exit { status, stderr } if stderr.is_empty() => {
                write!(f, "Command failed: {}", status)
            }
            SourceError::Exit { status, stderr } => {
                write!(f, "Command failed: {}: {}", status, stderr)
            }
            SourceError::Io(msg) => write!(f, "I/O error: {}", msg),
            SourceError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

/// Abstraction for endpoint inventories.
///
/// Implementations do no caching and no retries: the refresh timer decides
/// when to ask again. A fetch may be slow; it is always called from the frame
/// loop, one at a time.
pub trait RecordSource {
    /// Fetches the full current record set.
    fn try_fetch(&mut self) -> Result<Vec<EndpointRecord>, SourceError>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;

    /// Fetches the full record set, downgrading any failure to an empty set.
    ///
    /// The dashboard never distinguishes "no records" from "fetch failed";
    /// the failure is only visible in the log.
    fn fetch(&mut self) -> Vec<EndpointRecord> {
        match self.try_fetch() {
            Ok(records) => records,
            Err(e) => {
                warn!(source = %self.describe(), error = %e, "endpoint fetch failed");
                Vec::new()
            }
        }
    }
}
