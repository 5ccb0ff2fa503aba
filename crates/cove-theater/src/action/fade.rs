use cove_core::Color;
use tracing::debug;

use super::Step;
use crate::context::TheaterContext;
use crate::surface::Surface;

/// Which part of the fade is playing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FadeStage {
    /// Overlay goes from transparent to opaque.
    #[default]
    FadeOut,
    /// Overlay stays opaque.
    Hold,
    /// Overlay goes from opaque back to transparent.
    FadeIn,
}

/// Covers the screen with a color, holds it, and uncovers it again.
#[derive(Debug, Clone)]
pub struct ScreenFade {
    fade_out_ms: f64,
    hold_ms: f64,
    fade_in_ms: f64,
    color: Color,
    stage: FadeStage,
    elapsed_ms: f64,
    alpha: u8,
    // Copied from config at start.
    min_duration_ms: f64,
    time_tolerance_ms: f64,
}

impl ScreenFade {
    /// Create a fade with the three stage lengths in milliseconds.
    pub fn new(fade_out_ms: f64, hold_ms: f64, fade_in_ms: f64, color: Color) -> Self {
        Self {
            fade_out_ms,
            hold_ms,
            fade_in_ms,
            color,
            stage: FadeStage::FadeOut,
            elapsed_ms: 0.0,
            alpha: 0,
            min_duration_ms: f64::MIN_POSITIVE,
            time_tolerance_ms: 0.0,
        }
    }

    /// Current overlay opacity.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Current stage.
    pub fn stage(&self) -> FadeStage {
        self.stage
    }

    /// The overlay color (its own alpha is ignored).
    pub fn color(&self) -> Color {
        self.color
    }

    pub(super) fn start(&mut self, ctx: &mut TheaterContext<'_>) {
        self.min_duration_ms = ctx.config.min_duration_ms;
        self.time_tolerance_ms = ctx.config.time_tolerance_ms;
    }

    pub(super) fn update(&mut self, _ctx: &mut TheaterContext<'_>, delta_ms: f64) -> Step {
        self.elapsed_ms += delta_ms;
        match self.stage {
            FadeStage::FadeOut => {
                if self.stage_done(self.fade_out_ms) {
                    self.alpha = 255;
                    self.advance(FadeStage::Hold);
                } else {
                    let t = self.elapsed_ms / self.fade_out_ms.max(self.min_duration_ms);
                    self.alpha = (t * 255.0).min(255.0) as u8;
                }
            }
            FadeStage::Hold => {
                self.alpha = 255;
                if self.stage_done(self.hold_ms) {
                    self.advance(FadeStage::FadeIn);
                }
            }
            FadeStage::FadeIn => {
                if self.stage_done(self.fade_in_ms) {
                    self.alpha = 0;
                    return Step::Complete;
                }
                let t = self.elapsed_ms / self.fade_in_ms.max(self.min_duration_ms);
                self.alpha = (255.0 - t * 255.0).max(0.0) as u8;
            }
        }
        Step::Continue
    }

    fn stage_done(&self, length_ms: f64) -> bool {
        self.elapsed_ms + self.time_tolerance_ms >= length_ms
    }

    fn advance(&mut self, next: FadeStage) {
        debug!(from = ?self.stage, to = ?next, "fade stage");
        self.stage = next;
        self.elapsed_ms = 0.0;
    }

    pub(super) fn render(&mut self, surface: &mut dyn Surface) {
        // Drawn even at alpha 0 so the overlay never pops.
        let viewport = surface.viewport();
        surface.fill_rect(viewport, self.color.with_alpha(self.alpha));
    }
}
