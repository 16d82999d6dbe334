//! epview - read-only terminal dashboard for Confluent private-link egress endpoints.
//!
//! The library holds everything except process setup:
//! - `model` - endpoint records, phases and ordering
//! - `source` - where snapshots come from (Confluent CLI, JSON file, scripted)
//! - `view` - layout engine and frame composition
//! - `tui` - terminal session, state machine and input handling

pub mod model;
pub mod source;
pub mod tui;
pub mod util;
pub mod view;
