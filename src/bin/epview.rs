//! epview - auto-refreshing terminal dashboard for Confluent egress endpoints.
//!
//! Usage:
//!   epview                          # list endpoints via the Confluent CLI
//!   epview --input endpoints.json   # read the same JSON from a file on every refresh
//!   epview --log-file epview.log    # write tracing output to a file

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use epview::source::{CommandSource, FileSource, RecordSource};
use epview::tui::{App, POLL_TIMEOUT};

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Terminal dashboard for Confluent private-link egress endpoints.
#[derive(Parser)]
#[command(name = "epview", version, about = "Confluent egress endpoint dashboard")]
struct Args {
    /// Read endpoints from a JSON file instead of running the Confluent CLI.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write logs to FILE. RUST_LOG overrides the default `info` level.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error: cannot open log file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let source: Box<dyn RecordSource> = match &args.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(CommandSource::confluent()),
    };

    // Setup graceful shutdown
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        flag.store(true, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    let app = App::new(source).with_interrupt_flag(interrupted);
    if let Err(e) = app.run(POLL_TIMEOUT) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Sends tracing output to `path`; the terminal itself belongs to the TUI.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
