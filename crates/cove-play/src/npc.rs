use cove_core::{Dynamic, EntityId, Vec2};
use cove_theater::{Action, Sequencer};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::trace;

use crate::config::PlayConfig;
use crate::error::PlayResult;
use crate::player::facing_for;
use crate::stage::Stage;

const WANDER_DIRECTIONS: [Vec2; 5] = [
    Vec2::ZERO,
    Vec2::new(0.0, -1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(1.0, 0.0),
];

/// A character that wanders around and talks when spoken to.
#[derive(Debug, Clone)]
pub struct Npc {
    id: EntityId,
    lines: Vec<String>,
    direction: Vec2,
    since_turn_ms: f64,
}

impl Npc {
    /// Put a new NPC on the stage.
    pub fn spawn<S: Into<String>>(
        stage: &mut Stage,
        name: &str,
        pos: Vec2,
        lines: impl IntoIterator<Item = S>,
    ) -> PlayResult<Self> {
        let id = stage.spawn(Dynamic::new(name, pos))?;
        Ok(Self {
            id,
            lines: lines.into_iter().map(Into::into).collect(),
            direction: Vec2::ZERO,
            since_turn_ms: 0.0,
        })
    }

    /// The NPC's entity ID.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// What the NPC says, line by line.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// One dialog action per line, for queueing one after another.
    pub fn dialog(&self) -> Vec<Action> {
        self.lines.iter().map(|l| Action::dialog(l.as_str())).collect()
    }

    /// Current wander direction (unit length or zero).
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Walk in a random direction, picking a new one every
    /// `npc_wander_interval_ms`.
    ///
    /// While a sequence is active the NPC holds still, unless a scripted
    /// move is steering it.
    pub fn wander(
        &mut self,
        stage: &mut Stage,
        sequencer: &Sequencer,
        rng: &mut StdRng,
        config: &PlayConfig,
        delta_ms: f64,
    ) -> PlayResult<()> {
        if sequencer.controls_entity(self.id) {
            return Ok(());
        }
        let body = stage.get_mut(self.id)?;
        if sequencer.has_active() {
            body.v = Vec2::ZERO;
            return Ok(());
        }

        self.since_turn_ms += delta_ms;
        if self.since_turn_ms >= config.npc_wander_interval_ms {
            self.since_turn_ms = 0.0;
            self.direction = WANDER_DIRECTIONS[rng.random_range(0..WANDER_DIRECTIONS.len())];
            trace!(entity = %self.id, dx = self.direction.x, dy = self.direction.y, "npc turned");
        }

        body.v = self.direction * (config.npc_speed * delta_ms);
        if let Some(facing) = facing_for(body.v) {
            body.facing = facing;
        }
        Ok(())
    }
}
