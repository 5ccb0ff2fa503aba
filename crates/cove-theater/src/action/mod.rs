//! Scripted actions: the closed set of things a cutscene can do.
//!
//! Every action shares one [`Lifecycle`]: the first tick runs the variant's
//! start transition, later ticks run its per-frame update, and completion
//! runs its teardown exactly once. Completed actions do no further work and
//! are removed by the sequencer on its next pass.

mod dialog;
mod fade;
mod movement;
mod wait;

pub use dialog::ShowDialog;
pub use fade::{FadeStage, ScreenFade};
pub use movement::MoveEntity;
pub use wait::Wait;

use cove_core::{Color, EntityId, Vec2};
use tracing::debug;

use crate::config::TheaterConfig;
use crate::context::TheaterContext;
use crate::event::TheaterEventKind;
use crate::surface::Surface;

/// Outcome of one per-frame update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Keep running next frame.
    Continue,
    /// The action reached its completion condition.
    Complete,
}

/// Lifecycle flags shared by every action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifecycle {
    started: bool,
    completed: bool,
}

impl Lifecycle {
    /// Whether the start transition has run.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Whether the action has completed.
    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// The concrete behavior of an action.
#[derive(Debug, Clone)]
pub enum ActionKind {
    /// Show a line of dialog until confirmed.
    Dialog(ShowDialog),
    /// Do nothing for a while.
    Wait(Wait),
    /// Steer an entity to a position.
    Move(MoveEntity),
    /// Fade the screen to a color and back.
    Fade(ScreenFade),
}

impl ActionKind {
    /// Short lowercase name used in logs and events.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dialog(_) => "dialog",
            Self::Wait(_) => "wait",
            Self::Move(_) => "move",
            Self::Fade(_) => "fade",
        }
    }

    /// The entity this action steers, if any.
    pub fn entity(&self) -> Option<EntityId> {
        match self {
            Self::Move(m) => Some(m.entity()),
            _ => None,
        }
    }

    fn start(&mut self, ctx: &mut TheaterContext<'_>) {
        match self {
            Self::Dialog(_) => {}
            Self::Wait(w) => w.start(ctx),
            Self::Move(m) => m.start(ctx),
            Self::Fade(f) => f.start(ctx),
        }
    }

    fn update(&mut self, ctx: &mut TheaterContext<'_>, delta_ms: f64) -> Step {
        match self {
            Self::Dialog(d) => d.update(ctx),
            Self::Wait(w) => w.update(ctx),
            Self::Move(m) => m.update(ctx, delta_ms),
            Self::Fade(f) => f.update(ctx, delta_ms),
        }
    }

    fn finish(&mut self, ctx: &mut TheaterContext<'_>) {
        if let Self::Move(m) = self {
            m.finish(ctx);
        }
    }

    fn render(&mut self, surface: &mut dyn Surface, config: &TheaterConfig) {
        match self {
            Self::Dialog(d) => d.render(surface, config),
            Self::Fade(f) => f.render(surface),
            Self::Wait(_) | Self::Move(_) => {}
        }
    }
}

/// One unit of scripted behavior.
#[derive(Debug, Clone)]
pub struct Action {
    lifecycle: Lifecycle,
    kind: ActionKind,
}

impl Action {
    /// Wrap a behavior in a fresh, unstarted action.
    pub fn new(kind: ActionKind) -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            kind,
        }
    }

    /// Show `text` until the confirm key is released.
    pub fn dialog(text: impl Into<String>) -> Self {
        ShowDialog::new(text).into()
    }

    /// Wait `delay_ms` milliseconds of theater time.
    pub fn wait(delay_ms: f64) -> Self {
        Wait::new(delay_ms).into()
    }

    /// Move `entity` to `target` over `duration_ms`.
    ///
    /// With `through_obstacles` the entity's collisions are switched off for
    /// the duration of the move.
    pub fn move_to(
        entity: EntityId,
        target: Vec2,
        duration_ms: f64,
        through_obstacles: bool,
    ) -> Self {
        MoveEntity::new(entity, target, duration_ms, through_obstacles).into()
    }

    /// Fade to `color`, hold, and fade back.
    pub fn fade(fade_out_ms: f64, hold_ms: f64, fade_in_ms: f64, color: Color) -> Self {
        ScreenFade::new(fade_out_ms, hold_ms, fade_in_ms, color).into()
    }

    /// Lifecycle flags.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether the start transition has run.
    pub fn is_started(&self) -> bool {
        self.lifecycle.started
    }

    /// Whether the action has completed.
    pub fn is_completed(&self) -> bool {
        self.lifecycle.completed
    }

    /// The concrete behavior.
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// True if this is a still-running move steering `id`.
    pub fn controls(&self, id: EntityId) -> bool {
        !self.lifecycle.completed
            && matches!(&self.kind, ActionKind::Move(m) if m.entity() == id)
    }

    /// Advance one frame. The first call runs the start transition first.
    pub fn tick(&mut self, ctx: &mut TheaterContext<'_>, delta_ms: f64) {
        if self.lifecycle.completed {
            return;
        }
        if !self.lifecycle.started {
            self.kind.start(ctx);
            self.lifecycle.started = true;
            let label = self.kind.label();
            debug!(action = label, frame = ctx.clock.frame(), "action started");
            ctx.emit(
                TheaterEventKind::ActionStarted {
                    action: label,
                    entity: self.kind.entity(),
                },
                format!("{label} started"),
            );
        }
        if self.kind.update(ctx, delta_ms) == Step::Complete {
            self.complete(ctx);
        }
    }

    /// Draw the action's visuals, if it has any.
    ///
    /// Dialog panels and fades are screen-space overlays, so the camera
    /// `offset` does not move them.
    pub fn render(&mut self, surface: &mut dyn Surface, _offset: Vec2, config: &TheaterConfig) {
        if self.lifecycle.completed {
            return;
        }
        self.kind.render(surface, config);
    }

    /// Mark the action completed and undo whatever it changed.
    ///
    /// Runs the teardown at most once.
    pub fn complete(&mut self, ctx: &mut TheaterContext<'_>) {
        if self.lifecycle.completed {
            return;
        }
        self.lifecycle.completed = true;
        self.kind.finish(ctx);
        let label = self.kind.label();
        debug!(action = label, frame = ctx.clock.frame(), "action completed");
        ctx.emit(
            TheaterEventKind::ActionCompleted {
                action: label,
                entity: self.kind.entity(),
            },
            format!("{label} completed"),
        );
    }

    /// Stop the action early through the same teardown as [`Action::complete`].
    pub fn cancel(&mut self, ctx: &mut TheaterContext<'_>) {
        self.complete(ctx);
    }
}

impl From<ActionKind> for Action {
    fn from(kind: ActionKind) -> Self {
        Self::new(kind)
    }
}

impl From<ShowDialog> for Action {
    fn from(d: ShowDialog) -> Self {
        Self::new(ActionKind::Dialog(d))
    }
}

impl From<Wait> for Action {
    fn from(w: Wait) -> Self {
        Self::new(ActionKind::Wait(w))
    }
}

impl From<MoveEntity> for Action {
    fn from(m: MoveEntity) -> Self {
        Self::new(ActionKind::Move(m))
    }
}

impl From<ScreenFade> for Action {
    fn from(f: ScreenFade) -> Self {
        Self::new(ActionKind::Fade(f))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Harness;
    use super::*;
    use crate::event::TheaterEventKind;

    #[test]
    fn first_tick_starts_then_updates() {
        let mut h = Harness::new();
        let mut action = Action::wait(100.0);
        assert!(!action.is_started());

        action.tick(&mut h.frame(16.0), 16.0);
        assert!(action.is_started());
        assert!(!action.is_completed());

        let started = h
            .events
            .events()
            .iter()
            .filter(|e| matches!(e.kind, TheaterEventKind::ActionStarted { .. }))
            .count();
        assert_eq!(started, 1);
    }

    #[test]
    fn start_runs_once() {
        let mut h = Harness::new();
        let mut action = Action::wait(1000.0);
        for _ in 0..5 {
            action.tick(&mut h.frame(16.0), 16.0);
        }
        let started = h
            .events
            .events()
            .iter()
            .filter(|e| matches!(e.kind, TheaterEventKind::ActionStarted { .. }))
            .count();
        assert_eq!(started, 1);
    }

    #[test]
    fn complete_is_idempotent() {
        let mut h = Harness::new();
        let mut action = Action::wait(10.0);
        action.complete(&mut h.ctx());
        action.complete(&mut h.ctx());
        assert!(action.is_completed());
        assert_eq!(h.events.len(), 1);
    }

    #[test]
    fn completed_action_ignores_ticks() {
        let mut h = Harness::new();
        let mut action = Action::wait(10.0);
        action.complete(&mut h.ctx());
        action.tick(&mut h.frame(16.0), 16.0);
        assert!(!action.is_started());
    }

    #[test]
    fn controls_only_matches_running_move_for_entity() {
        let mut h = Harness::new();
        let id = EntityId::new();
        let other = EntityId::new();
        let mut action = Action::move_to(id, Vec2::new(1.0, 1.0), 100.0, false);
        assert!(action.controls(id));
        assert!(!action.controls(other));
        assert!(!Action::wait(1.0).controls(id));

        action.complete(&mut h.ctx());
        assert!(!action.controls(id));
    }

    #[test]
    fn labels() {
        assert_eq!(Action::dialog("hi").kind().label(), "dialog");
        assert_eq!(Action::wait(1.0).kind().label(), "wait");
        assert_eq!(
            Action::fade(1.0, 1.0, 1.0, Color::BLACK).kind().label(),
            "fade"
        );
    }
}
