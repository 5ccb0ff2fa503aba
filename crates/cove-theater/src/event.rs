use cove_core::EntityId;

use crate::sequencer::GroupId;

/// What kind of sequencing event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TheaterEventKind {
    /// A group was appended to the back of the queue.
    GroupQueued {
        /// The new group.
        group: GroupId,
        /// Number of actions in it.
        size: usize,
    },
    /// An action ran its start transition.
    ActionStarted {
        /// Short name of the action variant.
        action: &'static str,
        /// The entity it steers, if any.
        entity: Option<EntityId>,
    },
    /// An action reached completion (naturally or by cancellation).
    ActionCompleted {
        /// Short name of the action variant.
        action: &'static str,
        /// The entity it steered, if any.
        entity: Option<EntityId>,
    },
    /// A scripted move was deflected and recomputed its heading.
    MoveRedirected {
        /// The moving entity.
        entity: EntityId,
    },
    /// Every member of the front group completed and the group was dropped.
    GroupFinished {
        /// The finished group.
        group: GroupId,
    },
    /// A group was dropped before its members completed on their own.
    GroupCancelled {
        /// The cancelled group.
        group: GroupId,
        /// Members that were still running.
        dropped: usize,
    },
}

impl TheaterEventKind {
    /// Check whether a given entity is involved in this event.
    pub fn involves(&self, id: EntityId) -> bool {
        match self {
            Self::ActionStarted { entity, .. } | Self::ActionCompleted { entity, .. } => {
                *entity == Some(id)
            }
            Self::MoveRedirected { entity } => *entity == id,
            Self::GroupQueued { .. } | Self::GroupFinished { .. } | Self::GroupCancelled { .. } => {
                false
            }
        }
    }
}

/// A record of something that happened while sequencing.
#[derive(Debug, Clone)]
pub struct TheaterEvent {
    /// The theater frame when this event occurred.
    pub frame: u64,
    /// Theater time in milliseconds.
    pub time_ms: f64,
    /// The specific kind of event that occurred.
    pub kind: TheaterEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl TheaterEvent {
    /// Create a new event.
    pub fn new(
        frame: u64,
        time_ms: f64,
        kind: TheaterEventKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            frame,
            time_ms,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates sequencing events, oldest first.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<TheaterEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: TheaterEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[TheaterEvent] {
        &self.events
    }

    /// Return all events recorded during the given frame.
    pub fn events_at_frame(&self, frame: u64) -> Vec<&TheaterEvent> {
        self.events.iter().filter(|e| e.frame == frame).collect()
    }

    /// Return all events involving the given entity.
    pub fn events_for_entity(&self, id: EntityId) -> Vec<&TheaterEvent> {
        self.events.iter().filter(|e| e.kind.involves(id)).collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
