//! Simulation clock: a min-heap of timestamped events.
//!
//! The repeating walker tick is modeled as a self-rescheduling [EventKind::Tick]
//! event tied to a [TickSourceId]. Only one source is active at a time; arming
//! a new one retires the previous, so a restart can never leave a second timer
//! redrawing over the same walkers.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::Resource;

/// Fixed simulation-time period between walker ticks, in milliseconds.
pub const TICK_PERIOD_MS: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    SimulationStarted,
    Tick,
}

/// Handle for one repeating tick source. Ticks carrying a retired id are
/// dropped by the step system instead of being rescheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickSourceId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub timestamp: u64,
    pub kind: EventKind,
    pub source: Option<TickSourceId>,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap; at equal timestamps
        // SimulationStarted pops before Tick.
        other
            .timestamp
            .cmp(&self.timestamp)
            .then_with(|| other.kind.cmp(&self.kind))
            .then_with(|| other.source.cmp(&self.source))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The event currently being processed; inserted by the runner before each
/// schedule run.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

#[derive(Debug, Default, Resource)]
pub struct SimulationClock {
    now: u64,
    events: BinaryHeap<Event>,
    sources_armed: u64,
    active_source: Option<TickSourceId>,
}

impl SimulationClock {
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn schedule_at(&mut self, timestamp: u64, kind: EventKind, source: Option<TickSourceId>) {
        debug_assert!(
            timestamp >= self.now,
            "event timestamp must be >= current time"
        );
        self.events.push(Event {
            timestamp,
            kind,
            source,
        });
    }

    pub fn schedule_in(&mut self, delta_ms: u64, kind: EventKind, source: Option<TickSourceId>) {
        self.schedule_at(self.now + delta_ms, kind, source);
    }

    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.events.pop()?;
        self.now = event.timestamp;
        Some(event)
    }

    pub fn next_event_time(&self) -> Option<u64> {
        self.events.peek().map(|event| event.timestamp)
    }

    pub fn pending_event_count(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Arms a fresh repeating tick source and schedules its first tick one
    /// period from now. Any previously armed source is retired.
    pub fn arm_tick_source(&mut self) -> TickSourceId {
        self.sources_armed += 1;
        let id = TickSourceId(self.sources_armed);
        self.active_source = Some(id);
        self.schedule_in(TICK_PERIOD_MS, EventKind::Tick, Some(id));
        id
    }

    /// Schedules the next tick for `source`, one period from now.
    pub fn schedule_next_tick(&mut self, source: TickSourceId) {
        self.schedule_in(TICK_PERIOD_MS, EventKind::Tick, Some(source));
    }

    pub fn active_tick_source(&self) -> Option<TickSourceId> {
        self.active_source
    }

    pub fn is_active_source(&self, source: TickSourceId) -> bool {
        self.active_source == Some(source)
    }
}
