//! TUI color palette.
//!
//! A [`Theme`] is built once at startup and handed to the renderer by
//! reference. Pure data; there are no global style statics.
//!
//! Color semantics:
//! - Bright green: rain heads, highlighted menu row, headings, prompts
//! - Dark green: rain trails
//! - Gray: hints and de-emphasized text

use ratatui::style::{Color, Modifier, Style};

/// Hacker green.
pub const MATRIX_GREEN_BRIGHT: Color = Color::Rgb(0x00, 0xFF, 0x00);

/// Dark green.
pub const MATRIX_GREEN_DIM: Color = Color::Rgb(0x00, 0x64, 0x00);

/// Muted gray for hints.
pub const MUTED_GRAY: Color = Color::Rgb(0x44, 0x44, 0x44);

/// Every style the renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Leading glyph of a rain drop.
    pub rain_head: Style,
    /// Trailing glyphs of a rain drop.
    pub rain_trail: Style,
    /// Screen titles.
    pub title: Style,
    /// Glowing emphasis: selected row, subtitle, lit prompt, footers.
    pub glow: Style,
    /// Hint lines and the unlit prompt.
    pub muted: Style,
    /// Section headings inside a page.
    pub heading: Style,
    /// Regular body text.
    pub body: Style,
    /// Splash name art.
    pub art: Style,
}

impl Theme {
    /// Green-on-black palette.
    pub const fn matrix() -> Self {
        Theme {
            rain_head: Style::new().fg(MATRIX_GREEN_BRIGHT),
            rain_trail: Style::new().fg(MATRIX_GREEN_DIM),
            title: Style::new()
                .fg(MATRIX_GREEN_BRIGHT)
                .add_modifier(Modifier::BOLD),
            glow: Style::new()
                .fg(MATRIX_GREEN_BRIGHT)
                .add_modifier(Modifier::BOLD),
            muted: Style::new().fg(MUTED_GRAY),
            heading: Style::new().add_modifier(Modifier::BOLD),
            body: Style::new(),
            art: Style::new().fg(MATRIX_GREEN_BRIGHT),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::matrix()
    }
}

// ============================================================================
// TESTS
// ============================================================================
