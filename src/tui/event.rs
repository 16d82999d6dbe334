//! Event handling for TUI.
//!
//! Uses a separate thread to poll for terminal events with a bounded wait.
//! A wait that times out is reported as [`Event::Tick`], so the frame loop
//! runs at least once per poll interval even without input.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// No input within the poll interval.
    Tick,
    /// Key press.
    Key(KeyEvent),
    /// Terminal resize (width, height).
    Resize(u16, u16),
}

/// Event handler that polls for terminal events in a separate thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Kept alive to prevent channel closure.
    _tx: Sender<Event>,
}

impl EventHandler {
    /// Creates a new event handler that waits at most `poll_timeout` per event.
    pub fn new(poll_timeout: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                let event = match event::poll(poll_timeout) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                        Ok(_) => continue,
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to read terminal event");
                            Event::Tick
                        }
                    },
                    Ok(false) => Event::Tick,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to poll terminal events");
                        thread::sleep(poll_timeout);
                        Event::Tick
                    }
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
