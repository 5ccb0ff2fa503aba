//! Visual theme: color palette, layout constants, and virtual canvas scaling.

use macroquad::prelude::*;

/// Virtual canvas width in pixels. The window scales this up.
pub const CANVAS_W: f32 = 480.0;
/// Virtual canvas height in pixels. The window scales this up.
pub const CANVAS_H: f32 = 270.0;

/// Font size for all on-canvas text.
pub const FONT_SIZE: u16 = 16;

/// PICO-8-inspired palette for the chrome around the game.
pub mod palette {
    use macroquad::prelude::Color;

    /// Black background.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Dark blue for deep backgrounds.
    pub const DARK_BLUE: Color = Color::new(0.114, 0.169, 0.326, 1.0);
    /// Light gray for borders and secondary text.
    pub const LIGHT_GRAY: Color = Color::new(0.761, 0.765, 0.780, 1.0);
    /// White for primary text.
    pub const WHITE: Color = Color::new(1.0, 0.945, 0.910, 1.0);
    /// Red for errors.
    pub const RED: Color = Color::new(1.0, 0.0, 0.302, 1.0);
    /// Yellow for highlights.
    pub const YELLOW: Color = Color::new(1.0, 0.925, 0.153, 1.0);
}

/// Convert a game color to a macroquad color.
pub fn to_mq(color: cove_core::Color) -> Color {
    let [r, g, b, a] = color.to_unit();
    Color::new(r, g, b, a)
}

/// Set up a `Camera2D` that maps the virtual canvas to the current window.
pub fn setup_virtual_canvas() {
    let scale = (screen_width() / CANVAS_W).min(screen_height() / CANVAS_H);

    let viewport_w = CANVAS_W * scale;
    let viewport_h = CANVAS_H * scale;
    let offset_x = (screen_width() - viewport_w) / 2.0;
    let offset_y = (screen_height() - viewport_h) / 2.0;

    set_camera(&Camera2D {
        zoom: vec2(2.0 / CANVAS_W, 2.0 / CANVAS_H),
        target: vec2(CANVAS_W / 2.0, CANVAS_H / 2.0),
        viewport: Some((
            offset_x as i32,
            offset_y as i32,
            viewport_w as i32,
            viewport_h as i32,
        )),
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_game_colors() {
        let c = to_mq(cove_core::Color::rgb(255, 0, 0));
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.0, 1.0));
        let faded = to_mq(cove_core::Color::BLACK.with_alpha(0));
        assert_eq!(faded.a, 0.0);
    }
}
