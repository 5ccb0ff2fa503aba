//! Text labels using macroquad's built-in font.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::FONT_SIZE;

/// Draw `text` centered horizontally and vertically in `area`.
pub fn draw_label_centered(text: &str, area: &Rect2, color: Color) {
    let dims = measure_text(text, None, FONT_SIZE, 1.0);
    let x = area.x + (area.w - dims.width) / 2.0;
    // `draw_text` positions the baseline.
    let y = area.y + (area.h - dims.height) / 2.0 + dims.offset_y;
    draw_text(text, x.floor(), y.floor(), f32::from(FONT_SIZE), color);
}

/// Draw `text` with its top-left corner at (`x`, `y`).
pub fn draw_label(text: &str, x: f32, y: f32, color: Color) {
    let dims = measure_text(text, None, FONT_SIZE, 1.0);
    draw_text(text, x.floor(), (y + dims.offset_y).floor(), f32::from(FONT_SIZE), color);
}
