//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all intelligence lives in the pure layers.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Terminal reader thread: forwards crossterm key and resize events
//! - Ticker thread: sends a tick every `tick_rate`
//! The event loop consumes from the channel one event at a time.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::error::TuiError;

use super::state::{Action, App, AppEvent};
use super::theme::Theme;
use super::update::{handle_background_event, update};
use super::view::render;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Animation step used when none is configured.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

/// Everything `run` needs, decided once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Interval between ticks.
    pub tick_rate: Duration,
    /// Seed for the rain RNG. None draws one from the OS.
    pub seed: Option<u64>,
    /// Palette handed to the renderer.
    pub theme: Theme,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
            theme: Theme::matrix(),
        }
    }
}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action, and for key
/// releases (reported on some platforms alongside presses).
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Char(' ') => Some(Action::Continue),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
///
/// If the alternate screen can't be entered, raw mode is undone before
/// returning the error.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, TuiError> {
    enable_raw_mode().map_err(TuiError::Setup)?;

    let entered = io::stdout()
        .execute(EnterAlternateScreen)
        .map(|_| ())
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

    entered.map_err(|e| {
        let _ = restore_terminal();
        TuiError::Setup(e)
    })
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Translate one terminal read into a loop event. None means skip it.
///
/// A read error becomes `InputClosed`: the reader stops after sending it.
fn translate_read(read: io::Result<Event>) -> Option<AppEvent> {
    match read {
        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
        Ok(Event::Resize(width, height)) => Some(AppEvent::Resize { width, height }),
        Ok(_) => None, // mouse, focus, paste
        Err(e) => {
            warn!(error = %e, "terminal input failed");
            Some(AppEvent::InputClosed)
        }
    }
}

/// Spawn a thread that reads crossterm events and forwards keys and resizes.
fn spawn_terminal_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let Some(app_event) = translate_read(event::read()) else {
                continue;
            };
            let closed = app_event == AppEvent::InputClosed;
            if tx.send(app_event).is_err() || closed {
                break; // receiver dropped, or nothing more to read
            }
        }
    });
}

/// Spawn a thread that sends a tick every `tick_rate` until the loop is gone.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>, tick_rate: Duration) {
    thread::spawn(move || {
        loop {
            thread::sleep(tick_rate);
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits.
///
/// Takes over the terminal, runs the event loop, and always hands the
/// terminal back, whether the loop ended normally or with an error.
pub fn run(config: RunConfig) -> Result<(), TuiError> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!(tick_rate = ?config.tick_rate, "terminal ready");

    let result = event_loop(&mut terminal, &config);
    let restored = restore_terminal().map_err(TuiError::Restore);

    info!(ok = result.is_ok(), "terminal released");
    result.and(restored)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &RunConfig,
) -> Result<(), TuiError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut app = App::new(&mut rng);

    // Replace the default size with the real one before the first frame
    let size = terminal.size().map_err(TuiError::Setup)?;
    handle_background_event(
        &mut app,
        AppEvent::Resize {
            width: size.width,
            height: size.height,
        },
        &mut rng,
    );

    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Spawn producer threads
    spawn_terminal_reader(tx.clone());
    spawn_ticker(tx, config.tick_rate);

    loop {
        // Render
        terminal
            .draw(|frame| render(&app, &config.theme, &mut rng, frame))
            .map_err(TuiError::Draw)?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    let before = app.screen;
                    let transition = update(&app, &action);
                    app.apply(transition);

                    if app.screen != before {
                        debug!(from = ?before, to = ?app.screen, "screen changed");
                    }
                    if app.should_quit {
                        info!(screen = ?app.screen, "quit requested");
                    }
                }
            }
            AppEvent::Resize { width, height } => {
                debug!(width, height, "resize");
                handle_background_event(&mut app, AppEvent::Resize { width, height }, &mut rng);
            }
            AppEvent::Tick => {
                let before = app.screen;
                handle_background_event(&mut app, AppEvent::Tick, &mut rng);
                if app.screen != before {
                    debug!(ticks = app.ticks, "splash timed out");
                }
            }
            AppEvent::InputClosed => return Err(TuiError::InputClosed),
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn q_maps_to_quit() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn vim_keys_map_to_movement() {
        assert_eq!(map_key(press(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(map_key(press(KeyCode::Char('k'))), Some(Action::MoveUp));
    }

    #[test]
    fn arrow_keys_map_to_movement() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(map_key(press(KeyCode::Down)), Some(Action::MoveDown));
    }

    #[test]
    fn enter_and_space_are_distinct() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Action::Enter));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Action::Continue));
    }

    #[test]
    fn unmapped_keys_return_none() {
        for code in [
            KeyCode::Char('z'),
            KeyCode::Char('Q'),
            KeyCode::Char('c'),
            KeyCode::Esc,
            KeyCode::Left,
            KeyCode::Tab,
        ] {
            assert_eq!(map_key(press(code)), None, "{:?}", code);
        }
    }

    #[test]
    fn key_release_is_ignored() {
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn read_error_closes_input() {
        let read = Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        assert_eq!(translate_read(read), Some(AppEvent::InputClosed));
    }

    #[test]
    fn keys_and_resizes_are_forwarded() {
        let key = press(KeyCode::Char('q'));
        assert_eq!(translate_read(Ok(Event::Key(key))), Some(AppEvent::Key(key)));
        assert_eq!(
            translate_read(Ok(Event::Resize(100, 30))),
            Some(AppEvent::Resize {
                width: 100,
                height: 30
            })
        );
    }

    #[test]
    fn other_terminal_events_are_skipped() {
        assert_eq!(translate_read(Ok(Event::FocusGained)), None);
        assert_eq!(translate_read(Ok(Event::Paste("x".into()))), None);
    }

    #[test]
    fn default_config_ticks_every_100ms() {
        let config = RunConfig::default();
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert!(config.seed.is_none());
        assert_eq!(config.theme, Theme::matrix());
    }
}
