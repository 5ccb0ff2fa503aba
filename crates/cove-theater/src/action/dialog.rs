use cove_core::Rect;

use super::Step;
use crate::config::TheaterConfig;
use crate::context::TheaterContext;
use crate::surface::Surface;

/// A line of dialog shown in a panel until the confirm key is released.
#[derive(Debug, Clone)]
pub struct ShowDialog {
    text: String,
    // Computed on first render; it depends on the viewport size.
    panel: Option<Rect>,
}

impl ShowDialog {
    /// Create a dialog showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            panel: None,
        }
    }

    /// The dialog text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The panel rect, once the dialog has been rendered.
    pub fn panel(&self) -> Option<Rect> {
        self.panel
    }

    pub(super) fn update(&mut self, ctx: &mut TheaterContext<'_>) -> Step {
        if ctx.input.was_released(ctx.config.confirm_key) {
            Step::Complete
        } else {
            Step::Continue
        }
    }

    pub(super) fn render(&mut self, surface: &mut dyn Surface, config: &TheaterConfig) {
        let region = config.dialog_region;
        let viewport = surface.viewport();
        let panel = *self
            .panel
            .get_or_insert_with(|| viewport.sub_rect(region.x, region.y, region.w, region.h));

        surface.fill_rect(panel, config.dialog_fill);
        surface.stroke_rect(panel, config.dialog_border);
        surface.draw_text_centered(&self.text, panel, config.dialog_text);
    }
}

#[cfg(test)]
mod tests {
    use cove_core::Color;

    use super::super::testing::Harness;
    use crate::action::Action;
    use crate::input::Key;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn held_confirm_does_not_close() {
        let mut h = Harness::new();
        let mut dialog = Action::dialog("Hi!");
        h.input.hold(Key::Confirm);
        for _ in 0..10 {
            dialog.tick(&mut h.frame(16.0), 16.0);
            h.input.next_frame();
        }
        assert!(!dialog.is_completed());
    }

    #[test]
    fn release_closes_on_that_frame_only() {
        let mut h = Harness::new();
        let mut dialog = Action::dialog("Hi!");
        h.input.hold(Key::Confirm);
        dialog.tick(&mut h.frame(16.0), 16.0);
        assert!(!dialog.is_completed());

        h.input.release(Key::Confirm);
        dialog.tick(&mut h.frame(16.0), 16.0);
        assert!(dialog.is_completed());
    }

    #[test]
    fn other_keys_do_not_close() {
        let mut h = Harness::new();
        let mut dialog = Action::dialog("Hi!");
        h.input.release(Key::Trigger);
        dialog.tick(&mut h.frame(16.0), 16.0);
        assert!(!dialog.is_completed());
    }

    #[test]
    fn render_draws_panel_then_text() {
        let h = Harness::new();
        let mut dialog = Action::dialog("Hello there");
        let mut surface = RecordingSurface::new(200.0, 100.0);
        dialog.render(&mut surface, cove_core::Vec2::ZERO, &h.config);

        assert_eq!(surface.commands.len(), 3);
        let DrawCommand::Fill(panel, fill) = surface.commands[0] else {
            panic!("expected fill first, got {:?}", surface.commands[0]);
        };
        assert!((panel.x - 10.0).abs() < 1e-9);
        assert!((panel.y - 70.0).abs() < 1e-9);
        assert!((panel.w - 180.0).abs() < 1e-9);
        assert!((panel.h - 25.0).abs() < 1e-9);
        assert_eq!(fill, Color::rgba(0, 0, 0, 50));
        assert!(matches!(surface.commands[1], DrawCommand::Stroke(r, _) if r == panel));
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["Hello there"]);
    }

    #[test]
    fn panel_is_computed_once() {
        let h = Harness::new();
        let mut dialog = Action::dialog("x");
        let mut surface = RecordingSurface::new(200.0, 100.0);
        dialog.render(&mut surface, cove_core::Vec2::ZERO, &h.config);
        surface.resize(400.0, 400.0);
        surface.clear();
        dialog.render(&mut surface, cove_core::Vec2::new(30.0, -12.0), &h.config);

        let (panel, _) = surface.fills().next().unwrap();
        assert!((panel.w - 180.0).abs() < 1e-9);
    }
}
