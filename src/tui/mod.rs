//! TUI module for the interactive portfolio.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Screen, Action, Transition)
//! - `update`: Pure transitions, plus tick/resize handling
//! - `view`: Rendering from state (the rain layer is the only random part)
//! - `theme`: Palette injected into the view
//! - `run`: Effects (terminal lifecycle, producer threads, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::{RunConfig, run};
