//! Screen management: trait definition, screen identifiers, and transitions.

pub mod play;
pub mod title;

use crate::app::AppState;

/// Identifies which screen to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Title screen.
    Title,
    /// The island itself.
    Play,
}

/// A transition between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Push a new screen onto the stack.
    Push(ScreenId),
    /// Pop the current screen and return to the previous one.
    Pop,
    /// Replace the current screen.
    Replace(ScreenId),
    /// No transition.
    None,
}

/// Trait that all screens implement.
pub trait Screen {
    /// Advance by `delta_ms` and react to input. Returns a transition if the
    /// screen should change.
    fn update(&mut self, app: &mut AppState, delta_ms: f64) -> Transition;
    /// Draw the screen.
    ///
    /// Takes the app mutably because drawing a cutscene starts its actions.
    fn draw(&self, app: &mut AppState);
}
