use cove_core::{CollisionFlags, EntityId, Vec2};
use tracing::{debug, trace, warn};

use super::Step;
use crate::context::TheaterContext;
use crate::event::TheaterEventKind;

/// Steers an entity to a target position over a fixed duration.
///
/// The action only writes the entity's velocity each frame; the play state
/// integrates it. When collisions stay on and the entity gets pushed off
/// its heading, the move starts a new leg from wherever it ended up, aimed
/// at the same target and due at the same time.
#[derive(Debug, Clone)]
pub struct MoveEntity {
    entity: EntityId,
    target: Vec2,
    duration_ms: f64,
    elapsed_ms: f64,
    through_obstacles: bool,
    // Displacement at the start of the current leg.
    heading: Vec2,
    // Flags captured at start, restored verbatim on completion.
    original_collision: Option<CollisionFlags>,
}

impl MoveEntity {
    /// Move `entity` to `target` over `duration_ms`.
    pub fn new(entity: EntityId, target: Vec2, duration_ms: f64, through_obstacles: bool) -> Self {
        Self {
            entity,
            target,
            duration_ms,
            elapsed_ms: 0.0,
            through_obstacles,
            heading: Vec2::ZERO,
            original_collision: None,
        }
    }

    /// The steered entity.
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Where the entity ends up.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Time left in the current leg's budget, before elapsed time is subtracted.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Time spent in the current leg.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Whether collisions are switched off while moving.
    pub fn through_obstacles(&self) -> bool {
        self.through_obstacles
    }

    pub(super) fn start(&mut self, ctx: &mut TheaterContext<'_>) {
        let floor = ctx.config.min_duration_ms;
        if self.duration_ms < floor || self.duration_ms.is_nan() {
            warn!(
                entity = %self.entity,
                duration_ms = self.duration_ms,
                floor,
                "move duration below floor, clamping"
            );
            self.duration_ms = floor;
        }

        let Some(body) = ctx.entities.body_mut(self.entity) else {
            warn!(entity = %self.entity, "move target entity does not exist");
            return;
        };
        self.original_collision = Some(body.collision());
        self.heading = self.target - body.position();
        if self.through_obstacles {
            body.set_collision(CollisionFlags::GHOST);
        }
    }

    pub(super) fn update(&mut self, ctx: &mut TheaterContext<'_>, delta_ms: f64) -> Step {
        let epsilon = ctx.config.move_epsilon;
        let tolerance = ctx.config.redirect_tolerance;
        let floor = ctx.config.min_duration_ms;
        let slack = ctx.config.time_tolerance_ms;

        let Some(body) = ctx.entities.body_mut(self.entity) else {
            warn!(entity = %self.entity, "moving entity vanished, ending move");
            return Step::Complete;
        };

        self.elapsed_ms += delta_ms;
        let remaining = self.target - body.position();
        if self.elapsed_ms + slack >= self.duration_ms || remaining.magnitude() <= epsilon {
            return Step::Complete;
        }

        let mut redirected = false;
        if !self.through_obstacles
            && !remaining
                .normalized()
                .approx_eq(self.heading.normalized(), tolerance)
        {
            self.heading = remaining;
            self.duration_ms = (self.duration_ms - self.elapsed_ms).max(floor);
            self.elapsed_ms = 0.0;
            redirected = true;
        }

        let velocity = self.heading * (delta_ms / self.duration_ms);
        trace!(entity = %self.entity, vx = velocity.x, vy = velocity.y, "move velocity");
        body.set_velocity(velocity);

        if redirected {
            debug!(
                entity = %self.entity,
                remaining_ms = self.duration_ms,
                "move deflected, recomputing heading"
            );
            ctx.emit(
                TheaterEventKind::MoveRedirected {
                    entity: self.entity,
                },
                format!("{} redirected", self.entity),
            );
        }
        Step::Continue
    }

    pub(super) fn finish(&mut self, ctx: &mut TheaterContext<'_>) {
        // Never started: nothing was changed.
        let Some(flags) = self.original_collision else {
            return;
        };
        if let Some(body) = ctx.entities.body_mut(self.entity) {
            body.set_position(self.target);
            body.set_velocity(Vec2::ZERO);
            body.set_collision(flags);
        }
    }
}
