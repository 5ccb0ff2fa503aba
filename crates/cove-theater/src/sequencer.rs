use std::collections::VecDeque;
use std::fmt;

use cove_core::{EntityId, Vec2};
use tracing::{debug, info};

use crate::action::Action;
use crate::clock::TheaterClock;
use crate::config::TheaterConfig;
use crate::context::{EntityStore, TheaterContext};
use crate::event::{EventLog, TheaterEvent, TheaterEventKind};
use crate::input::{Input, KeyState};
use crate::surface::Surface;

/// Identifies a queued group, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Actions that run together. The group ends when every member has.
#[derive(Debug, Clone)]
pub struct ActionGroup {
    id: GroupId,
    actions: Vec<Action>,
}

impl ActionGroup {
    /// The group's identifier.
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Members in enqueue order, which is also render order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of members still in the group.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether every member has been removed.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Whether a running member is a move steering `id`.
    pub fn controls(&self, id: EntityId) -> bool {
        self.actions.iter().any(|a| a.controls(id))
    }
}

/// Runs queued action groups one at a time, front first.
///
/// Owned by the play state for the lifetime of a session. Producers append
/// with [`Sequencer::enqueue_sequential`] / [`Sequencer::enqueue_concurrent`];
/// the game loop calls [`Sequencer::tick`] once per frame and
/// [`Sequencer::render`] after the world has been drawn.
pub struct Sequencer {
    queue: VecDeque<ActionGroup>,
    just_completed: bool,
    next_group: u64,
    clock: TheaterClock,
    events: EventLog,
    config: TheaterConfig,
}

impl fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequencer")
            .field("frame", &self.clock.frame())
            .field("groups", &self.queue.len())
            .field("just_completed", &self.just_completed)
            .field("events", &self.events.len())
            .finish()
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(TheaterConfig::default())
    }
}

impl Sequencer {
    /// Create an empty sequencer.
    pub fn new(config: TheaterConfig) -> Self {
        Self {
            queue: VecDeque::new(),
            just_completed: false,
            next_group: 0,
            clock: TheaterClock::new(),
            events: EventLog::new(config.max_events),
            config,
        }
    }

    /// True while anything is queued, and on the frame the last action was
    /// removed, so input stays gated through the completion frame.
    pub fn has_active(&self) -> bool {
        self.just_completed || !self.queue.is_empty()
    }

    /// True iff the front group has a running move steering `id`.
    pub fn controls_entity(&self, id: EntityId) -> bool {
        self.queue.front().is_some_and(|g| g.controls(id))
    }

    /// Queue one action as its own group.
    pub fn enqueue(&mut self, action: Action) -> GroupId {
        self.push_group(vec![action])
    }

    /// Queue each action as its own group, so they run one after another.
    pub fn enqueue_sequential(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<GroupId> {
        actions.into_iter().map(|a| self.enqueue(a)).collect()
    }

    /// Queue all actions as a single group, so they run together.
    ///
    /// An empty collection queues nothing.
    pub fn enqueue_concurrent(
        &mut self,
        actions: impl IntoIterator<Item = Action>,
    ) -> Option<GroupId> {
        let actions: Vec<Action> = actions.into_iter().collect();
        if actions.is_empty() {
            return None;
        }
        Some(self.push_group(actions))
    }

    fn push_group(&mut self, actions: Vec<Action>) -> GroupId {
        let id = GroupId(self.next_group);
        self.next_group += 1;
        let size = actions.len();
        self.queue.push_back(ActionGroup { id, actions });
        debug!(group = %id, size, queued = self.queue.len(), "group queued");
        self.events.push(TheaterEvent::new(
            self.clock.frame(),
            self.clock.now_ms(),
            TheaterEventKind::GroupQueued { group: id, size },
            format!("group {id} queued with {size} action(s)"),
        ));
        id
    }

    /// Advance the front group by one frame.
    ///
    /// Members that completed on an earlier frame are removed without being
    /// ticked; the rest are ticked in order. A group left empty is dropped.
    pub fn tick(&mut self, entities: &mut dyn EntityStore, input: &dyn Input, delta_ms: f64) {
        self.clock.advance(delta_ms);
        self.just_completed = false;

        let Some(group) = self.queue.front_mut() else {
            return;
        };
        let mut ctx = TheaterContext {
            entities,
            input,
            clock: &self.clock,
            events: &mut self.events,
            config: &self.config,
        };

        let mut removed = 0;
        group.actions.retain_mut(|action| {
            if action.is_completed() {
                removed += 1;
                false
            } else {
                action.tick(&mut ctx, delta_ms);
                true
            }
        });
        if removed > 0 {
            self.just_completed = true;
        }

        if group.is_empty() {
            let id = group.id;
            info!(group = %id, frame = ctx.clock.frame(), "group finished");
            ctx.emit(
                TheaterEventKind::GroupFinished { group: id },
                format!("group {id} finished"),
            );
            self.queue.pop_front();
        }
    }

    /// Draw the front group's members in order. Call after the world.
    pub fn render(&mut self, surface: &mut dyn Surface, offset: Vec2) {
        if let Some(group) = self.queue.front_mut() {
            for action in &mut group.actions {
                action.render(surface, offset, &self.config);
            }
        }
    }

    /// Stop the front group, finalizing each member as if it had completed.
    ///
    /// Returns how many members were still running. Counts as a completion
    /// for [`Sequencer::has_active`] until the next tick.
    pub fn cancel_front(&mut self, entities: &mut dyn EntityStore) -> usize {
        let Some(mut group) = self.queue.pop_front() else {
            return 0;
        };
        let idle = KeyState::new();
        let mut ctx = TheaterContext {
            entities,
            input: &idle,
            clock: &self.clock,
            events: &mut self.events,
            config: &self.config,
        };
        let mut dropped = 0;
        for action in &mut group.actions {
            if !action.is_completed() {
                dropped += 1;
                action.cancel(&mut ctx);
            }
        }
        info!(group = %group.id, dropped, "group cancelled");
        ctx.emit(
            TheaterEventKind::GroupCancelled {
                group: group.id,
                dropped,
            },
            format!("group {} cancelled", group.id),
        );
        self.just_completed = true;
        dropped
    }

    /// Cancel every queued group, front first. Returns the number of groups.
    pub fn clear(&mut self, entities: &mut dyn EntityStore) -> usize {
        let mut groups = 0;
        while !self.queue.is_empty() {
            self.cancel_front(entities);
            groups += 1;
        }
        groups
    }

    /// The group currently running, if any.
    pub fn front(&self) -> Option<&ActionGroup> {
        self.queue.front()
    }

    /// All queued groups, front first.
    pub fn groups(&self) -> impl Iterator<Item = &ActionGroup> {
        self.queue.iter()
    }

    /// Number of queued groups.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no groups are queued.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Theater time.
    pub fn clock(&self) -> &TheaterClock {
        &self.clock
    }

    /// Sequencing events so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Engine tuning.
    pub fn config(&self) -> &TheaterConfig {
        &self.config
    }
}
