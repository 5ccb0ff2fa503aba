//! Play state for Cove.
//!
//! Ties the sequencing engine to a small tile world: a [`Stage`] of moving
//! entities integrated against a [`TileMap`], a keyboard-driven [`Player`],
//! wandering [`Npc`]s, and a following [`Camera`]. [`PlayState`] runs them
//! in a fixed per-frame order and gates player input while a cutscene plays.

/// Pixel offset that keeps the player centered.
pub mod camera;
/// Configuration for a play session.
pub mod config;
/// Error types for the play crate.
pub mod error;
/// Tile grid and solid-tile queries.
pub mod map;
/// Wandering, talking characters.
pub mod npc;
/// Keyboard-driven player entity.
pub mod player;
/// Entity storage and collision-aware integration.
pub mod stage;
/// The per-frame play loop.
pub mod state;

/// Re-export of [`camera::Camera`].
pub use camera::Camera;
/// Re-export of [`config::PlayConfig`].
pub use config::PlayConfig;
/// Re-exports of [`error::PlayError`] and [`error::PlayResult`].
pub use error::{PlayError, PlayResult};
/// Re-exports of the map types.
pub use map::{Tile, TileMap};
/// Re-export of [`npc::Npc`].
pub use npc::Npc;
/// Re-export of [`player::Player`].
pub use player::Player;
/// Re-export of [`stage::Stage`].
pub use stage::Stage;
/// Re-export of [`state::PlayState`].
pub use state::PlayState;
