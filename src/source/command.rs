//! Record source backed by the Confluent CLI.

use std::process::{Command, Stdio};

use tracing::debug;

use super::{RecordSource, SourceError};
use crate::model::{EndpointRecord, decode_records};

/// Default CLI executable.
pub const DEFAULT_PROGRAM: &str = "confluent";

/// Arguments that list private-link egress endpoints as JSON.
pub const DEFAULT_ARGS: &[&str] = &[
    "network",
    "access-point",
    "private-link",
    "egress-endpoint",
    "list",
    "--output",
    "json",
];

/// Runs an external command and decodes its stdout as an endpoint list.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `confluent network access-point private-link egress-endpoint list --output json`.
    pub fn confluent() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_ARGS.iter().copied())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for CommandSource {
    fn default() -> Self {
        Self::confluent()
    }
}

impl RecordSource for CommandSource {
    fn try_fetch(&mut self) -> Result<Vec<EndpointRecord>, SourceError> {
        // stdin/stderr must never reach the terminal while the dashboard owns it.
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| SourceError::Spawn(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(SourceError::Exit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let records = decode_records(&output.stdout)?;
        debug!(count = records.len(), "decoded CLI output");
        Ok(records)
    }

    fn describe(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}
