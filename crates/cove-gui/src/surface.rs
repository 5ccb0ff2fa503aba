//! Draws game primitives with macroquad.

use cove_core::{Color, Rect};
use cove_theater::Surface;

use crate::theme::to_mq;
use crate::widget::Rect2;
use crate::widget::label::draw_label_centered;

/// A [`Surface`] over the current macroquad render target.
///
/// Coordinates are virtual canvas pixels, so the size is the canvas size and
/// not the window's.
#[derive(Debug, Clone, Copy)]
pub struct MacroquadSurface {
    width: f64,
    height: f64,
}

impl MacroquadSurface {
    /// A surface covering a `width` by `height` canvas.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }
}

impl Surface for MacroquadSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = Rect2::from(rect);
        macroquad::shapes::draw_rectangle(r.x, r.y, r.w, r.h, to_mq(color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let r = Rect2::from(rect);
        macroquad::shapes::draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, to_mq(color));
    }

    fn draw_text_centered(&mut self, text: &str, area: Rect, color: Color) {
        draw_label_centered(text, &Rect2::from(area), to_mq(color));
    }
}
