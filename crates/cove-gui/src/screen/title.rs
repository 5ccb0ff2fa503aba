//! Title screen.

use tracing::error;

use super::{Screen, ScreenId, Transition};
use crate::app::AppState;
use crate::input::{enter_pressed, escape_pressed};
use crate::theme::{CANVAS_H, CANVAS_W, palette};
use crate::widget::Rect2;
use crate::widget::label::draw_label_centered;
use crate::widget::panel::{draw_panel, draw_panel_highlighted};

/// Title screen state.
#[derive(Debug, Default)]
pub struct TitleScreen {
    /// Error from the last attempt to start a game.
    pub error: Option<String>,
}

impl TitleScreen {
    /// Create a new title screen.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for TitleScreen {
    fn update(&mut self, app: &mut AppState, _delta_ms: f64) -> Transition {
        if escape_pressed() {
            app.should_quit = true;
            return Transition::None;
        }
        if enter_pressed() {
            match app.start_play() {
                Ok(()) => {
                    self.error = None;
                    return Transition::Push(ScreenId::Play);
                }
                Err(e) => {
                    error!(error = %e, "failed to start game");
                    self.error = Some(e.to_string());
                }
            }
        }
        Transition::None
    }

    fn draw(&self, _app: &mut AppState) {
        let canvas = Rect2::new(0.0, 0.0, CANVAS_W, CANVAS_H);
        let banner = canvas.centered(200.0, 40.0);
        draw_panel(&banner);
        draw_label_centered("COVE", &banner, palette::YELLOW);

        let hint = Rect2::new(0.0, banner.y + 56.0, CANVAS_W, 16.0);
        draw_label_centered("Enter: start   Esc: quit", &hint, palette::LIGHT_GRAY);

        if let Some(err) = &self.error {
            let (_, bottom) = canvas.inset(8.0).split_bottom(24.0);
            draw_panel_highlighted(&bottom);
            draw_label_centered(err, &bottom, palette::RED);
        }
    }
}
