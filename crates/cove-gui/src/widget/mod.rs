//! Pixel art widgets for the chrome around the game view.

pub mod label;
pub mod panel;

use macroquad::prelude::*;

/// Draw a 1-pixel bordered rectangle (border inside bounds).
pub fn bordered_rect(area: &Rect2, fill: Color, border: Color) {
    let Rect2 { x, y, w, h } = *area;
    draw_rectangle(x, y, w, h, fill);
    draw_rectangle(x, y, w, 1.0, border);
    draw_rectangle(x, y + h - 1.0, w, 1.0, border);
    draw_rectangle(x, y, 1.0, h, border);
    draw_rectangle(x + w - 1.0, y, 1.0, h, border);
}

/// A simple rectangular area for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect2 {
    /// Create a new rect.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A `w` by `h` rect centered inside `self`.
    pub fn centered(&self, w: f32, h: f32) -> Self {
        Self::new(self.x + (self.w - w) / 2.0, self.y + (self.h - h) / 2.0, w, h)
    }

    /// Shrink by `margin` on every side.
    pub fn inset(&self, margin: f32) -> Self {
        Self::new(
            self.x + margin,
            self.y + margin,
            (self.w - 2.0 * margin).max(0.0),
            (self.h - 2.0 * margin).max(0.0),
        )
    }

    /// Split off the bottom `h` pixels. Returns (rest, bottom).
    pub fn split_bottom(&self, h: f32) -> (Self, Self) {
        let h = h.min(self.h);
        (
            Self::new(self.x, self.y, self.w, self.h - h),
            Self::new(self.x, self.y + self.h - h, self.w, h),
        )
    }
}

impl From<cove_core::Rect> for Rect2 {
    fn from(r: cove_core::Rect) -> Self {
        Self::new(r.x as f32, r.y as f32, r.w as f32, r.h as f32)
    }
}
