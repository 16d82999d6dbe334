//! Terminal User Interface for the endpoint dashboard.
//!
//! Owns the terminal session, the frame loop and all user-visible state.
//! Geometry and content composition live in [`crate::view`].

mod app;
mod event;
mod input;
mod render;
pub mod state;
mod style;

pub use app::{App, POLL_TIMEOUT};
pub use event::{Event, EventHandler};
pub use input::{KeyAction, handle_key};
pub use state::{AppState, RefreshScheduler, ViewportState};
