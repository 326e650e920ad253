//! Opt-in file logging.
//!
//! The TUI owns the terminal, so log lines never go to stdout or stderr.
//! When a log file is requested, a non-blocking fmt layer writes there;
//! otherwise no subscriber is installed and `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Directive for both the library and the binary target.
fn filter_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("terminal_portfolio={level},portfolio={level}")
}

/// Install a global subscriber appending to `path`.
///
/// The returned guard flushes buffered lines on drop; keep it alive for
/// the whole run.
pub fn init(path: &Path, verbose: bool) -> io::Result<WorkerGuard> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let file = options.open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new(filter_directive(verbose)));

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level_for_both_targets() {
        assert_eq!(
            filter_directive(true),
            "terminal_portfolio=debug,portfolio=debug"
        );
        assert_eq!(
            filter_directive(false),
            "terminal_portfolio=info,portfolio=info"
        );
    }
}
