//! portfolio CLI
//!
//! Full-screen terminal portfolio. Starts on the splash screen; no
//! arguments are needed.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;

use terminal_portfolio::logging;
use terminal_portfolio::tui::theme::Theme;
use terminal_portfolio::tui::{self, RunConfig};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Browse a terminal portfolio behind a falling-glyph rain intro")]
#[command(version)]
struct Cli {
    /// Animation tick interval in milliseconds
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(10..))]
    tick_ms: u64,

    /// Seed for the rain animation (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Append diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level instead of info
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            tick_rate: Duration::from_millis(self.tick_ms),
            seed: self.seed,
            theme: Theme::matrix(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Must outlive the TUI so buffered log lines get flushed
    let _log_guard = cli.log_file.as_deref().and_then(|path| {
        match logging::init(path, cli.verbose) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: could not open log file {}: {}", path.display(), e);
                None
            }
        }
    });

    match tui::run(cli.run_config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal session failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
