//! terminal-portfolio: a menu-driven portfolio in the terminal, behind a
//! falling-glyph rain intro.

pub mod content;
pub mod error;
pub mod logging;
pub mod rain;
pub mod tui;
