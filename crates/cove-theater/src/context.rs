use std::collections::HashMap;

use cove_core::{Body, Dynamic, EntityId};

use crate::clock::TheaterClock;
use crate::config::TheaterConfig;
use crate::event::{EventLog, TheaterEvent, TheaterEventKind};
use crate::input::Input;

/// Resolves entity handles held by actions into mutable bodies.
///
/// Actions never own entities; they keep an [`EntityId`] and look the body
/// up each frame. A missing entity yields `None`.
pub trait EntityStore {
    /// The body registered under `id`, if any.
    fn body_mut(&mut self, id: EntityId) -> Option<&mut dyn Body>;
}

impl EntityStore for HashMap<EntityId, Dynamic> {
    fn body_mut(&mut self, id: EntityId) -> Option<&mut dyn Body> {
        self.get_mut(&id).map(|d| d as &mut dyn Body)
    }
}

/// Mutable context passed to each action during a tick.
pub struct TheaterContext<'a> {
    /// Entities that actions may steer.
    pub entities: &'a mut dyn EntityStore,
    /// This frame's input.
    pub input: &'a dyn Input,
    /// Theater time, already advanced for this frame.
    pub clock: &'a TheaterClock,
    /// Sequencing event log.
    pub events: &'a mut EventLog,
    /// Engine tuning.
    pub config: &'a TheaterConfig,
}

impl TheaterContext<'_> {
    /// Record an event stamped with the current frame and time.
    pub fn emit(&mut self, kind: TheaterEventKind, description: impl Into<String>) {
        self.events.push(TheaterEvent::new(
            self.clock.frame(),
            self.clock.now_ms(),
            kind,
            description,
        ));
    }

    /// Current theater time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }
}
