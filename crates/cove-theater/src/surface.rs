use cove_core::{Color, Rect};

/// A drawing target in screen pixels.
///
/// Coordinates handed to these methods are final: callers have already
/// applied the camera offset.
pub trait Surface {
    /// Viewport width in pixels.
    fn width(&self) -> f64;
    /// Viewport height in pixels.
    fn height(&self) -> f64;
    /// Fill `rect` with `color`, blending by its alpha.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Draw a one-pixel outline around `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    /// Draw `text` centered inside `area`.
    fn draw_text_centered(&mut self, text: &str, area: Rect, color: Color);

    /// The full viewport as a rect at the origin.
    fn viewport(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }
}

/// One primitive recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    Fill(Rect, Color),
    /// A rectangle outline.
    Stroke(Rect, Color),
    /// Centered text.
    Text {
        /// The string drawn.
        text: String,
        /// The area it was centered in.
        area: Rect,
        /// Text color.
        color: Color,
    },
}

/// A [`Surface`] that remembers what was drawn instead of drawing it.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    /// Everything drawn since the last [`RecordingSurface::clear`].
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording of the given viewport size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Change the viewport size, as a window resize would.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Drop recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All recorded fills.
    pub fn fills(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill(r, color) => Some((r, color)),
            _ => None,
        })
    }

    /// All recorded text strings.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Stroke(rect, color));
    }

    fn draw_text_centered(&mut self, text: &str, area: Rect, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            area,
            color,
        });
    }
}
