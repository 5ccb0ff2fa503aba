use cove_core::{Dynamic, EntityId, Facing, Rect, Vec2};
use cove_theater::{Input, Key, Sequencer};

use crate::error::PlayResult;
use crate::stage::Stage;

/// The player-controlled entity.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    id: EntityId,
}

impl Player {
    /// Collision box relative to the player's size: the lower middle of the sprite.
    pub const HITBOX: Rect = Rect::new(4.0 / 16.0, 11.0 / 16.0, 8.0 / 16.0, 5.0 / 16.0);

    /// Put a new player on the stage at `pos`.
    pub fn spawn(stage: &mut Stage, pos: Vec2) -> PlayResult<Self> {
        let id = stage.spawn(Dynamic::new("Player", pos).with_hitbox(Self::HITBOX))?;
        Ok(Self { id })
    }

    /// The player's entity ID.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Turn held direction keys into velocity.
    ///
    /// Keys only steer while no sequence is active. During a sequence the
    /// player stands still unless a scripted move is steering it, in which
    /// case the velocity belongs to that move.
    pub fn control(
        &self,
        stage: &mut Stage,
        input: &dyn Input,
        sequencer: &Sequencer,
        speed: f64,
        delta_ms: f64,
    ) -> PlayResult<()> {
        let body = stage.get_mut(self.id)?;
        if !sequencer.has_active() {
            let step = speed * delta_ms;
            body.v = Vec2::new(
                axis(input, Key::Left, Key::Right) * step,
                axis(input, Key::Up, Key::Down) * step,
            );
            if let Some(facing) = facing_for(body.v) {
                body.facing = facing;
            }
        } else if !sequencer.controls_entity(self.id) {
            body.v = Vec2::ZERO;
        }
        Ok(())
    }

    /// Entities whose interact region overlaps the area in front of the player,
    /// in spawn order.
    pub fn interaction_targets(&self, stage: &Stage) -> PlayResult<Vec<EntityId>> {
        let area = interact_area(stage.get(self.id)?);
        Ok(stage
            .iter()
            .filter(|e| e.id != self.id && area.intersects(&e.interactable_region()))
            .map(|e| e.id)
            .collect())
    }
}

/// The strip just outside `body` on the side it faces, in world units.
pub fn interact_area(body: &Dynamic) -> Rect {
    let r = match body.facing {
        Facing::Up => Rect::new(0.0, -0.5, 1.0, 0.5),
        Facing::Down => Rect::new(0.0, 1.0, 1.0, 0.5),
        Facing::Left => Rect::new(-0.25, 0.0, 0.5, 1.0),
        Facing::Right => Rect::new(0.75, 0.0, 0.5, 1.0),
    };
    body.bounds().sub_rect(r.x, r.y, r.w, r.h)
}

/// Facing implied by a velocity. Horizontal motion wins on diagonals.
pub(crate) fn facing_for(v: Vec2) -> Option<Facing> {
    if v.x < 0.0 {
        Some(Facing::Left)
    } else if v.x > 0.0 {
        Some(Facing::Right)
    } else if v.y < 0.0 {
        Some(Facing::Up)
    } else if v.y > 0.0 {
        Some(Facing::Down)
    } else {
        None
    }
}

// Opposite keys cancel out.
fn axis(input: &dyn Input, negative: Key, positive: Key) -> f64 {
    match (input.is_held(negative), input.is_held(positive)) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use cove_theater::{Action, KeyState};

    use super::*;

    fn setup() -> (Stage, Player, Sequencer) {
        let mut stage = Stage::new();
        let player = Player::spawn(&mut stage, Vec2::new(5.0, 5.0)).unwrap();
        (stage, player, Sequencer::default())
    }

    #[test]
    fn held_keys_set_velocity_and_facing() {
        let (mut stage, player, seq) = setup();
        let input = KeyState::new().with_held(Key::Right).with_held(Key::Up);
        player.control(&mut stage, &input, &seq, 0.01, 10.0).unwrap();
        let body = stage.get(player.id()).unwrap();
        assert!(body.v.approx_eq(Vec2::new(0.1, -0.1), 1e-12));
        assert_eq!(body.facing, Facing::Right);
    }

    #[test]
    fn opposite_keys_cancel() {
        let (mut stage, player, seq) = setup();
        let input = KeyState::new().with_held(Key::Left).with_held(Key::Right);
        player.control(&mut stage, &input, &seq, 0.01, 10.0).unwrap();
        let body = stage.get(player.id()).unwrap();
        assert_eq!(body.v, Vec2::ZERO);
        assert_eq!(body.facing, Facing::Down);
    }

    #[test]
    fn input_ignored_while_sequence_active() {
        let (mut stage, player, mut seq) = setup();
        stage.get_mut(player.id()).unwrap().v = Vec2::new(1.0, 0.0);
        seq.enqueue(Action::wait(100.0));
        let input = KeyState::new().with_held(Key::Down);
        player.control(&mut stage, &input, &seq, 0.01, 10.0).unwrap();
        assert_eq!(stage.get(player.id()).unwrap().v, Vec2::ZERO);
    }

    #[test]
    fn scripted_move_keeps_its_velocity() {
        let (mut stage, player, mut seq) = setup();
        seq.enqueue(Action::move_to(player.id(), Vec2::new(9.0, 5.0), 1000.0, false));
        seq.tick(&mut stage, &KeyState::new(), 10.0);
        let scripted = stage.get(player.id()).unwrap().v;
        assert!(scripted.x > 0.0);

        let input = KeyState::new().with_held(Key::Left);
        player.control(&mut stage, &input, &seq, 0.01, 10.0).unwrap();
        assert_eq!(stage.get(player.id()).unwrap().v, scripted);
    }

    #[test]
    fn interact_area_follows_facing() {
        let mut body = Dynamic::new("P", Vec2::new(2.0, 2.0));
        body.facing = Facing::Up;
        assert_eq!(interact_area(&body), Rect::new(2.0, 1.5, 1.0, 0.5));
        body.facing = Facing::Right;
        assert_eq!(interact_area(&body), Rect::new(2.75, 2.0, 0.5, 1.0));
    }

    #[test]
    fn finds_entity_in_front() {
        let (mut stage, player, _) = setup();
        let npc = stage.spawn(Dynamic::new("Npc", Vec2::new(5.0, 6.0))).unwrap();
        stage.spawn(Dynamic::new("Far", Vec2::new(9.0, 9.0))).unwrap();
        // Default facing is down, towards the NPC.
        assert_eq!(player.interaction_targets(&stage).unwrap(), vec![npc]);

        stage.get_mut(player.id()).unwrap().facing = Facing::Up;
        assert!(player.interaction_targets(&stage).unwrap().is_empty());
    }
}
