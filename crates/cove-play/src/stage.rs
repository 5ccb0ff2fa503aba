use std::collections::HashMap;

use cove_core::{Body, CoveError, Dynamic, EntityId, Vec2};
use cove_theater::EntityStore;
use tracing::{debug, trace};

use crate::error::PlayResult;
use crate::map::TileMap;

/// Owns every entity on the current map and moves them each frame.
///
/// Iteration follows spawn order so integration is deterministic.
#[derive(Debug, Default)]
pub struct Stage {
    entities: HashMap<EntityId, Dynamic>,
    order: Vec<EntityId>,
}

impl Stage {
    /// Create an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity. Fails if its ID is already taken.
    pub fn spawn(&mut self, entity: Dynamic) -> PlayResult<EntityId> {
        let id = entity.id;
        if self.entities.contains_key(&id) {
            return Err(CoveError::DuplicateEntity(id).into());
        }
        debug!(entity = %id, name = %entity.name, x = entity.pos.x, y = entity.pos.y, "spawned");
        self.entities.insert(id, entity);
        self.order.push(id);
        Ok(id)
    }

    /// Remove an entity and hand it back.
    pub fn despawn(&mut self, id: EntityId) -> PlayResult<Dynamic> {
        let entity = self
            .entities
            .remove(&id)
            .ok_or(CoveError::EntityNotFound(id))?;
        self.order.retain(|e| *e != id);
        Ok(entity)
    }

    /// Look up an entity.
    pub fn get(&self, id: EntityId) -> PlayResult<&Dynamic> {
        self.entities
            .get(&id)
            .ok_or_else(|| CoveError::EntityNotFound(id).into())
    }

    /// Look up an entity mutably.
    pub fn get_mut(&mut self, id: EntityId) -> PlayResult<&mut Dynamic> {
        self.entities
            .get_mut(&id)
            .ok_or_else(|| CoveError::EntityNotFound(id).into())
    }

    /// Whether `id` is on the stage.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the stage is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entities in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Dynamic> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Entities sorted by the y coordinate of their feet, back to front.
    pub fn draw_order(&self) -> Vec<&Dynamic> {
        let mut sorted: Vec<&Dynamic> = self.iter().collect();
        sorted.sort_by(|a, b| a.feet_y().total_cmp(&b.feet_y()));
        sorted
    }

    /// Apply every entity's velocity, one axis at a time.
    ///
    /// A step along an axis is dropped when the entity's hitbox would
    /// overlap a solid tile (if it collides with statics) or another entity
    /// that also collides with dynamics. Velocity itself is left untouched.
    pub fn integrate(&mut self, map: &TileMap) {
        for &id in &self.order {
            let Some(mover) = self.entities.get(&id) else {
                continue;
            };
            let v = mover.v;
            if v == Vec2::ZERO {
                continue;
            }

            let mut pos = mover.pos;
            for step in [Vec2::new(v.x, 0.0), Vec2::new(0.0, v.y)] {
                if step == Vec2::ZERO {
                    continue;
                }
                let candidate = pos + step;
                if self.blocked(mover, candidate, map) {
                    trace!(entity = %id, dx = step.x, dy = step.y, "step blocked");
                } else {
                    pos = candidate;
                }
            }

            if let Some(mover) = self.entities.get_mut(&id) {
                mover.pos = pos;
            }
        }
    }

    fn blocked(&self, mover: &Dynamic, pos: Vec2, map: &TileMap) -> bool {
        let hitbox = mover.hitbox_at(pos);
        if mover.collision.solid_vs_static && map.overlaps_solid(&hitbox) {
            return true;
        }
        mover.collision.solid_vs_dynamic
            && self.iter().any(|other| {
                other.id != mover.id
                    && other.collision.solid_vs_dynamic
                    && other.hitbox().intersects(&hitbox)
            })
    }
}

impl EntityStore for Stage {
    fn body_mut(&mut self, id: EntityId) -> Option<&mut dyn Body> {
        self.entities.get_mut(&id).map(|d| d as &mut dyn Body)
    }
}
