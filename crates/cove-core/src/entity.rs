use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Rect, Vec2};

/// Unique identifier for every entity on a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Which way an entity is looking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Towards negative y.
    Up,
    /// Towards positive y.
    #[default]
    Down,
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
}

/// Whether an entity is blocked by static geometry and by other entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollisionFlags {
    /// Blocked by solid tiles.
    pub solid_vs_static: bool,
    /// Blocked by (and blocks) other solid entities.
    pub solid_vs_dynamic: bool,
}

impl CollisionFlags {
    /// Collides with everything.
    pub const SOLID: Self = Self::new(true, true);
    /// Passes through everything.
    pub const GHOST: Self = Self::new(false, false);

    /// Create a flag pair.
    pub const fn new(solid_vs_static: bool, solid_vs_dynamic: bool) -> Self {
        Self {
            solid_vs_static,
            solid_vs_dynamic,
        }
    }
}

impl Default for CollisionFlags {
    fn default() -> Self {
        Self::SOLID
    }
}

/// The part of an entity that scripted actions are allowed to touch.
///
/// The theater steers a body through its velocity and only writes the
/// position directly when snapping it onto a destination. Integration
/// (`position += velocity`) belongs to whoever owns the body.
pub trait Body {
    /// Current position (top-left corner) in world units.
    fn position(&self) -> Vec2;
    /// Teleport the body.
    fn set_position(&mut self, pos: Vec2);
    /// Displacement applied on the next integration step.
    fn velocity(&self) -> Vec2;
    /// Replace the pending displacement.
    fn set_velocity(&mut self, v: Vec2);
    /// Current collision flags.
    fn collision(&self) -> CollisionFlags;
    /// Replace the collision flags.
    fn set_collision(&mut self, flags: CollisionFlags);
}

/// A moving, colliding entity: the player, NPCs, pushable props.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dynamic {
    /// Unique identifier for this entity.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Top-left corner in world units.
    pub pos: Vec2,
    /// Pending displacement for the next integration step.
    pub v: Vec2,
    /// Extent in world units.
    pub size: Vec2,
    /// Collision box as fractions of `size`, relative to `pos`.
    pub relative_hitbox: Rect,
    /// Collision behaviour.
    pub collision: CollisionFlags,
    /// Last movement direction.
    pub facing: Facing,
}

impl Dynamic {
    /// Default extent of a character-sized entity.
    pub const DEFAULT_SIZE: Vec2 = Vec2::new(1.0, 1.0);

    /// Create a solid entity at `pos` with a random ID.
    pub fn new(name: impl Into<String>, pos: Vec2) -> Self {
        Self::with_id(EntityId::new(), name, pos)
    }

    /// Create an entity with a pre-assigned ID.
    pub fn with_id(id: EntityId, name: impl Into<String>, pos: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            pos,
            v: Vec2::ZERO,
            size: Self::DEFAULT_SIZE,
            relative_hitbox: Rect::new(0.0, 0.0, 1.0, 1.0),
            collision: CollisionFlags::SOLID,
            facing: Facing::default(),
        }
    }

    /// Set the entity's extent.
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Set the collision box as fractions of the entity's size.
    pub fn with_hitbox(mut self, relative: Rect) -> Self {
        self.relative_hitbox = relative;
        self
    }

    /// Set the collision flags.
    pub fn with_collision(mut self, flags: CollisionFlags) -> Self {
        self.collision = flags;
        self
    }

    /// World-space bounds of the whole entity.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// World-space collision box at the current position.
    pub fn hitbox(&self) -> Rect {
        self.hitbox_at(self.pos)
    }

    /// World-space collision box if the entity stood at `pos`.
    pub fn hitbox_at(&self, pos: Vec2) -> Rect {
        let r = self.relative_hitbox;
        Rect::new(
            pos.x + self.size.x * r.x,
            pos.y + self.size.y * r.y,
            self.size.x * r.w,
            self.size.y * r.h,
        )
    }

    /// Region another entity has to reach to interact with this one.
    pub fn interactable_region(&self) -> Rect {
        self.hitbox()
    }

    /// Y coordinate of the entity's feet, used for draw ordering.
    pub fn feet_y(&self) -> f64 {
        self.pos.y + self.size.y
    }
}

impl Body for Dynamic {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn velocity(&self) -> Vec2 {
        self.v
    }

    fn set_velocity(&mut self, v: Vec2) {
        self.v = v;
    }

    fn collision(&self) -> CollisionFlags {
        self.collision
    }

    fn set_collision(&mut self, flags: CollisionFlags) {
        self.collision = flags;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_display_shows_short_form() {
        let id = EntityId(Uuid::parse_str("a3f2b1c8-1234-5678-9abc-def012345678").unwrap());
        assert_eq!(id.to_string(), "a3f2b1c8");
    }

    #[test]
    fn new_dynamic_is_solid_and_still() {
        let d = Dynamic::new("Crate", Vec2::new(2.0, 3.0));
        assert_eq!(d.collision, CollisionFlags::SOLID);
        assert_eq!(d.v, Vec2::ZERO);
        assert_eq!(d.facing, Facing::Down);
    }

    #[test]
    fn hitbox_uses_relative_fractions() {
        let d = Dynamic::new("Player", Vec2::new(10.0, 20.0))
            .with_hitbox(Rect::new(0.25, 0.5, 0.5, 0.5));
        let hb = d.hitbox();
        assert!((hb.x - 10.25).abs() < 1e-12);
        assert!((hb.y - 20.5).abs() < 1e-12);
        assert!((hb.w - 0.5).abs() < 1e-12);
        assert!((hb.h - 0.5).abs() < 1e-12);
    }

    #[test]
    fn body_accessors_write_through() {
        let mut d = Dynamic::new("Npc", Vec2::ZERO);
        let body: &mut dyn Body = &mut d;
        body.set_velocity(Vec2::new(1.0, 0.0));
        body.set_collision(CollisionFlags::GHOST);
        body.set_position(Vec2::new(4.0, 4.0));
        assert_eq!(d.v, Vec2::new(1.0, 0.0));
        assert_eq!(d.collision, CollisionFlags::GHOST);
        assert_eq!(d.pos, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn dynamic_serializes_to_json() {
        let d = Dynamic::new("Sign", Vec2::new(1.0, 2.0));
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["name"], "Sign");
        assert_eq!(json["pos"]["x"], 1.0);
        assert_eq!(json["collision"]["solid_vs_static"], true);
    }
}
