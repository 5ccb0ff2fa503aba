//! Core value types for Cove: geometry, colors, and moving entities.
//!
//! This crate knows nothing about scripted sequences or rendering. It defines
//! the [`Body`] contract that the theater steers and the [`Dynamic`] entity
//! that the play state integrates each frame.

/// RGBA colors used by overlays and the renderer.
pub mod color;
/// Entity identifiers, collision flags, and the [`Body`] contract.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Two-dimensional vectors and axis-aligned rectangles in world units.
pub mod geometry;

/// Re-export of [`color::Color`].
pub use color::Color;
/// Re-export core entity types.
pub use entity::{Body, CollisionFlags, Dynamic, EntityId, Facing};
/// Re-export error types.
pub use error::{CoveError, CoveResult};
/// Re-export geometry types.
pub use geometry::{Rect, Vec2};
