//! Error type for the terminal session.
//!
//! Only the terminal itself can fail: taking it over, reading from it,
//! drawing to it, or handing it back. Event handling and rendering are total and never
//! produce errors.

use std::io;

use thiserror::Error;

/// Failure while driving the terminal.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Raw mode or the alternate screen could not be entered.
    #[error("failed to initialize terminal: {0}")]
    Setup(#[source] io::Error),

    /// The terminal stopped delivering input, so the session cannot be quit
    /// from the keyboard. The read error itself is logged where it happened.
    #[error("terminal input closed")]
    InputClosed,

    /// A frame could not be written.
    #[error("failed to draw frame: {0}")]
    Draw(#[source] io::Error),

    /// Raw mode or the alternate screen could not be left.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_names_the_stage() {
        let err = TuiError::Setup(io::Error::other("not a tty"));
        assert_eq!(err.to_string(), "failed to initialize terminal: not a tty");
    }

    #[test]
    fn input_closed_has_no_source() {
        let err = TuiError::InputClosed;
        assert_eq!(err.to_string(), "terminal input closed");
        assert!(err.source().is_none());
    }

    #[test]
    fn source_is_the_io_error() {
        let err = TuiError::Restore(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        let source = err.source().expect("has source");
        assert_eq!(source.to_string(), "gone");
    }
}
