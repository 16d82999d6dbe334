//! Main TUI application.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::{Frame, Terminal};
use tracing::{debug, info, warn};

use crate::source::RecordSource;
use crate::view::{compose, layout_for};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;

/// Longest wait for input before the frame loop runs again.
pub const POLL_TIMEOUT: Duration = Duration::from_secs(1);

/// Main TUI application.
pub struct App {
    source: Box<dyn RecordSource>,
    state: AppState,
    should_quit: bool,
    interrupted: Arc<AtomicBool>,
}

impl App {
    /// Creates a new App and performs the initial load from `source`.
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        let now = Instant::now();
        let mut app = Self {
            source,
            state: AppState::new(now),
            should_quit: false,
            interrupted: Arc::new(AtomicBool::new(false)),
        };
        app.reload(now);
        app
    }

    /// Shares a flag that, once set (e.g. by a signal handler), ends the loop cleanly.
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = flag;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the TUI application until quit or interrupt.
    pub fn run(mut self, poll_timeout: Duration) -> io::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        info!(source = %self.source.describe(), "dashboard started");
        let result = self.event_loop(&mut terminal, poll_timeout);
        let restored = guard.restore();

        info!("dashboard stopped");
        result.and(restored)
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        poll_timeout: Duration,
    ) -> io::Result<()> {
        terminal.clear()?;
        terminal.hide_cursor()?;
        let events = EventHandler::new(poll_timeout);

        loop {
            self.tick(Instant::now());
            if self.should_quit {
                break;
            }

            let now = Instant::now();
            terminal.draw(|frame| self.draw(frame, now))?;

            match events.next() {
                Ok(event) => self.handle_event(event, Instant::now()),
                Err(_) => self.should_quit = true,
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Start-of-frame bookkeeping: interrupt check and due auto-refresh.
    pub fn tick(&mut self, now: Instant) {
        if self.interrupted.load(Ordering::SeqCst) {
            info!("interrupted, quitting");
            self.should_quit = true;
            return;
        }
        if self.state.refresh.should_auto_refresh(now) {
            debug!("auto-refresh due");
            self.reload(now);
        }
    }

    /// Lays out, composes and renders one frame.
    pub fn draw(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let layout = layout_for(&self.state, area.width, area.height);
        self.state.set_visible_rows(layout.visible_rows());
        let commands = compose(&self.state, &layout, now);
        render(frame, &commands);
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Geometry is recomputed on every draw.
            Event::Tick | Event::Resize(..) => {}
            Event::Key(key) => match handle_key(&mut self.state, key, now) {
                KeyAction::Quit => self.should_quit = true,
                KeyAction::Refresh => {
                    debug!("manual refresh");
                    self.reload(now);
                }
                KeyAction::None => {}
            },
        }
        if self.interrupted.load(Ordering::SeqCst) {
            self.should_quit = true;
        }
    }

    /// Fetches a full snapshot and swaps it in.
    fn reload(&mut self, now: Instant) {
        let records = self.source.fetch();
        debug!(count = records.len(), "records loaded");
        self.state.apply_records(records, Local::now());
        self.state.refresh.mark_refreshed(now);
    }
}

/// Raw mode and alternate screen for the lifetime of the dashboard.
///
/// Restores the terminal on drop if [`TerminalGuard::restore`] was not called,
/// so early returns and panics leave a usable shell behind.
struct TerminalGuard {
    alternate_screen: bool,
    restored: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            alternate_screen: false,
            restored: false,
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        guard.alternate_screen = true;
        Ok(guard)
    }

    /// Undoes every setup step, even when an earlier one fails.
    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let leave = if self.alternate_screen {
            execute!(io::stdout(), LeaveAlternateScreen)
        } else {
            Ok(())
        };
        first_error([leave, disable_raw_mode(), execute!(io::stdout(), Show)])
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Keeps the first error of steps that have all already run.
fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().fold(Ok(()), |acc, r| acc.and(r))
}
