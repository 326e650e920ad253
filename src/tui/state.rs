//! TUI state algebra: plain data types, no terminal access.
//!
//! These types define the whole TUI state space. The transition functions
//! in `update` and the renderer in `view` both program against them.
//!
//! Design principle: the menu cursor lives on [`App`], not on a screen
//! variant, so leaving a page and coming back to the menu keeps it where it
//! was. Everything time-based (ticks, rain, loading dots) also lives on
//! [`App`] and only changes through background events.

use crossterm::event::KeyEvent;
use rand::Rng;

use crate::content::MENU;
use crate::rain::Rain;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Size assumed until the terminal reports its real one.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// The splash screen gives way to the menu once more ticks than this have passed.
pub const SPLASH_TICKS: u64 = 30;

/// The splash prompt is bright for the first `BLINK_ON` ticks of every
/// `BLINK_PERIOD`, dim for the rest.
pub const BLINK_PERIOD: u64 = 20;
pub const BLINK_ON: u64 = 10;

/// Loading dots cycle through `0..LOADING_DOTS`.
pub const LOADING_DOTS: u8 = 4;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A terminal reader thread sends `Key` and `Resize`, and `InputClosed`
///   once it can no longer read
/// - A ticker thread sends `Tick` at a fixed interval
///
/// Key events go through `map_key → update`; the rest go through
/// `handle_background_event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The terminal changed size.
    Resize { width: u16, height: u16 },
    /// One animation step elapsed.
    Tick,
    /// The terminal reader hit an error and stopped; no more keys will come.
    InputClosed,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Current screen.
    pub screen: Screen,

    /// Index into [`MENU`]. Always `< MENU.len()`.
    pub cursor: usize,

    /// Ticks since startup.
    pub ticks: u64,

    /// Loading indicator phase, `0..LOADING_DOTS`.
    pub loading_dot: u8,

    /// Background rain, one column per terminal column.
    pub rain: Rain,

    /// Terminal size, never below 1×1.
    pub width: u16,
    pub height: u16,

    /// Set to true when the app should exit on the next loop iteration.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
///
/// Splash is where every run starts. Menu is the hub; the other four are
/// read-only pages reached from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Splash,
    Menu,
    About,
    Skills,
    Experience,
    Contact,
}

impl Screen {
    /// True for the four content pages.
    pub fn is_page(self) -> bool {
        !matches!(self, Screen::Splash | Screen::Menu)
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the menu cursor up.
    MoveUp,
    /// Move the menu cursor down.
    MoveDown,
    /// Select / continue / go back, depending on the screen.
    Enter,
    /// Space: only leaves the splash screen.
    Continue,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// `update` returns this; [`App::apply`] is the only place it takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Show this screen (may be the current one). The cursor is kept.
    Screen(Screen),
    /// Stay on the menu with the cursor at this index.
    Cursor(usize),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on the splash screen at the default 80×24 size.
    pub fn new(rng: &mut impl Rng) -> Self {
        App::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT, rng)
    }

    /// Create an App on the splash screen at a given size.
    pub fn with_size(width: u16, height: u16, rng: &mut impl Rng) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        App {
            screen: Screen::Splash,
            cursor: 0,
            ticks: 0,
            loading_dot: 0,
            rain: Rain::seeded(width, height, rng),
            width,
            height,
            should_quit: false,
        }
    }

    /// Apply a transition produced by `update`.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Screen(screen) => self.screen = screen,
            Transition::Cursor(cursor) => self.cursor = cursor.min(MENU.len() - 1),
            Transition::Quit => self.should_quit = true,
        }
    }

    /// Whether the splash prompt is in its bright phase.
    pub fn prompt_lit(&self) -> bool {
        self.ticks % BLINK_PERIOD < BLINK_ON
    }
}

// ============================================================================
// TESTS
// ============================================================================
