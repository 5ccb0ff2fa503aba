//! Scripted sequencing engine for Cove.
//!
//! The theater serializes cutscene-style actions (dialog boxes, screen fades,
//! timed waits, scripted entity movement) against the real-time play state.
//! Actions are queued in groups: members of a group run together, groups run
//! one after another. Only the front group is ever ticked or rendered.
//!
//! The play state owns a single [`Sequencer`], ticks it once per frame, and
//! consults [`Sequencer::has_active`] and [`Sequencer::controls_entity`] to
//! decide whether player input should move anything.

/// Scripted actions and their shared lifecycle.
pub mod action;
/// Theater clock for measuring waits.
pub mod clock;
/// Configuration for the sequencing engine.
pub mod config;
/// Mutable context passed to actions each tick.
pub mod context;
/// Error types for the theater crate.
pub mod error;
/// Sequencing event types and the event log.
pub mod event;
/// The input oracle consumed by actions and the play state.
pub mod input;
/// The sequencer: a FIFO of concurrently running action groups.
pub mod sequencer;
/// The drawing contract actions render through.
pub mod surface;

/// Re-exports of the action types.
pub use action::{
    Action, ActionKind, FadeStage, Lifecycle, MoveEntity, ScreenFade, ShowDialog, Wait,
};
/// Re-export of [`clock::TheaterClock`].
pub use clock::TheaterClock;
/// Re-exports of the configuration types.
pub use config::{DialogRegion, TheaterConfig};
/// Re-exports of [`context::TheaterContext`] and [`context::EntityStore`].
pub use context::{EntityStore, TheaterContext};
/// Re-exports of [`error::TheaterError`] and [`error::TheaterResult`].
pub use error::{TheaterError, TheaterResult};
/// Re-exports of the event types.
pub use event::{EventLog, TheaterEvent, TheaterEventKind};
/// Re-exports of the input types.
pub use input::{Input, Key, KeyState};
/// Re-exports of [`sequencer::Sequencer`] and [`sequencer::ActionGroup`].
pub use sequencer::{ActionGroup, GroupId, Sequencer};
/// Re-exports of the surface types.
pub use surface::{DrawCommand, RecordingSurface, Surface};
