use cove_core::{Rect, Vec2};

/// Keeps a world position centered on screen.
///
/// The offset is in pixels and is added to every scaled world coordinate
/// when drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    offset: Vec2,
    smooth: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// A smooth camera at the origin.
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            smooth: true,
        }
    }

    /// Current pixel offset.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Whether the camera eases towards its target instead of snapping.
    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    /// Switch between smooth and snapped following. Returns the new mode.
    pub fn toggle_smooth(&mut self) -> bool {
        self.smooth = !self.smooth;
        self.smooth
    }

    /// Offset that puts `focus` in the middle of a `viewport`-sized screen.
    pub fn target_offset(focus: Vec2, tile_size: f64, viewport: Vec2) -> Vec2 {
        viewport * 0.5 - focus * tile_size
    }

    /// Move towards centering `focus`, covering `smoothing` of the remaining
    /// distance in smooth mode and all of it otherwise.
    pub fn follow(&mut self, focus: Vec2, tile_size: f64, viewport: Vec2, smoothing: f64) {
        let target = Self::target_offset(focus, tile_size, viewport);
        self.offset = if self.smooth {
            self.offset.lerp(target, smoothing)
        } else {
            target
        };
    }

    /// Center on `focus` immediately, whatever the mode.
    pub fn snap_to(&mut self, focus: Vec2, tile_size: f64, viewport: Vec2) {
        self.offset = Self::target_offset(focus, tile_size, viewport);
    }

    /// Map a world rectangle to screen pixels.
    pub fn world_to_screen(&self, world: &Rect, tile_size: f64) -> Rect {
        world.scale(tile_size).translate(self.offset)
    }

    /// Map a screen point back to world units.
    pub fn screen_to_world(&self, screen: Vec2, tile_size: f64) -> Vec2 {
        (screen - self.offset) * (1.0 / tile_size)
    }
}
