//! Pure state transitions: (App, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each screen defines which actions it accepts. Unhandled actions
//! return the current screen unchanged (no-op).

use rand::Rng;

use crate::content::{MENU, MenuAction};

use super::state::{Action, App, AppEvent, LOADING_DOTS, SPLASH_TICKS, Screen, Transition};

/// Pure state transition function for user actions.
///
/// Reads the current screen and cursor, never mutates. The effects
/// boundary applies the result with [`App::apply`].
pub fn update(app: &App, action: &Action) -> Transition {
    // Quit is honoured on every screen
    if *action == Action::Quit {
        return Transition::Quit;
    }

    match app.screen {
        Screen::Splash => update_splash(action),
        Screen::Menu => update_menu(app.cursor, action),
        Screen::About | Screen::Skills | Screen::Experience | Screen::Contact => {
            update_page(app.screen, action)
        }
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Splash: Enter or Space continue to the menu.
fn update_splash(action: &Action) -> Transition {
    match action {
        Action::Enter | Action::Continue => Transition::Screen(Screen::Menu),
        _ => Transition::Screen(Screen::Splash),
    }
}

/// Menu: clamped cursor movement, Enter runs the item under the cursor.
fn update_menu(cursor: usize, action: &Action) -> Transition {
    let last = MENU.len() - 1;

    match action {
        Action::MoveUp => Transition::Cursor(cursor.saturating_sub(1)),
        Action::MoveDown => Transition::Cursor((cursor + 1).min(last)),
        Action::Enter => match MENU.get(cursor).map(|item| item.action) {
            Some(MenuAction::Open(screen)) => Transition::Screen(screen),
            Some(MenuAction::Quit) => Transition::Quit,
            // Out-of-range cursor: snap it back instead of failing
            None => Transition::Cursor(last),
        },
        _ => Transition::Screen(Screen::Menu),
    }
}

/// Content page: Enter goes back to the menu; nothing else does anything.
fn update_page(screen: Screen, action: &Action) -> Transition {
    match action {
        Action::Enter => Transition::Screen(Screen::Menu),
        _ => Transition::Screen(screen),
    }
}

// ============================================================================
// BACKGROUND EVENTS
// ============================================================================

/// Handle timer and resize events, which mutate App directly.
///
/// Key events are not handled here; they go through `map_key` and
/// [`update`]. Passing one is a no-op, as is `InputClosed`, which only the
/// event loop acts on.
pub fn handle_background_event(app: &mut App, event: AppEvent, rng: &mut impl Rng) {
    match event {
        AppEvent::Tick => tick(app),
        AppEvent::Resize { width, height } => resize(app, width, height, rng),
        AppEvent::Key(_) | AppEvent::InputClosed => {}
    }
}

/// One animation step: advance counters and rain, maybe leave the splash.
fn tick(app: &mut App) {
    app.ticks = app.ticks.saturating_add(1);
    app.loading_dot = (app.loading_dot + 1) % LOADING_DOTS;
    app.rain.advance(app.height);

    if app.screen == Screen::Splash && app.ticks > SPLASH_TICKS {
        app.screen = Screen::Menu;
    }
}

/// Store the new size (at least 1×1) and restart the rain for it.
fn resize(app: &mut App, width: u16, height: u16, rng: &mut impl Rng) {
    app.width = width.max(1);
    app.height = height.max(1);
    app.rain.reseed(app.width, app.height, rng);
}

// ============================================================================
// TESTS
// ============================================================================
