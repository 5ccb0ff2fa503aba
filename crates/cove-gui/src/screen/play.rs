//! The island: runs the game and draws it.

use cove_theater::{Input, Key};
use tracing::error;

use super::{Screen, Transition};
use crate::app::AppState;
use crate::input::poll_keys;
use crate::surface::MacroquadSurface;
use crate::theme::{CANVAS_H, CANVAS_W, palette};
use crate::widget::label::draw_label;

/// Longest frame fed to the game, so a stalled window does not teleport
/// everything.
pub const MAX_FRAME_MS: f64 = 100.0;

/// Play screen state.
#[derive(Debug, Default)]
pub struct PlayScreen {
    /// Whether the key help line is shown.
    pub show_help: bool,
}

impl PlayScreen {
    /// Create a play screen with the help line visible.
    pub fn new() -> Self {
        Self { show_help: true }
    }
}

impl Screen for PlayScreen {
    fn update(&mut self, app: &mut AppState, delta_ms: f64) -> Transition {
        let keys = poll_keys();
        if keys.was_released(Key::Quit) {
            return Transition::Pop;
        }
        let Some(play) = app.play.as_mut() else {
            return Transition::Pop;
        };
        if let Err(e) = play.tick(&keys, delta_ms.min(MAX_FRAME_MS)) {
            error!(error = %e, "game tick failed");
            app.play = None;
            return Transition::Pop;
        }
        if self.show_help && play.sequencer().has_active() {
            self.show_help = false;
        }
        Transition::None
    }

    fn draw(&self, app: &mut AppState) {
        let Some(play) = app.play.as_mut() else {
            return;
        };
        play.set_viewport(f64::from(CANVAS_W), f64::from(CANVAS_H));
        let mut surface = MacroquadSurface::new(CANVAS_W, CANVAS_H);
        play.render(&mut surface);

        if self.show_help {
            draw_label(
                "arrows: walk  enter: talk  T: demo  F: camera  Q/E: zoom",
                4.0,
                CANVAS_H - 14.0,
                palette::WHITE,
            );
        }
    }
}
