//! Bordered panels.

use super::{Rect2, bordered_rect};
use crate::theme::palette;

/// Draw a panel with a light border.
pub fn draw_panel(area: &Rect2) {
    bordered_rect(area, palette::DARK_BLUE, palette::LIGHT_GRAY);
}

/// Draw a panel that calls attention to itself.
pub fn draw_panel_highlighted(area: &Rect2) {
    bordered_rect(area, palette::BLACK, palette::YELLOW);
}
