//! The toast collection manager and unit lifecycle driver.
//!
//! The manager owns the ordered set of active toasts and advances each one
//! through `Entering -> Visible -> Exiting -> Dismissed`. There are no
//! per-toast timer objects: every record carries at most one pending
//! deadline, derived from its current phase, and [`ToastManager::tick`]
//! processes whatever is due. A record that left a phase can never be hit
//! by that phase's timer, because the deadline was replaced along with the
//! phase.
//!
//! Time is passed in explicitly (`now: Instant`), so callers drive the
//! timeline: an event loop sleeps until [`ToastManager::next_deadline`]
//! and ticks, and tests step through the lifecycle without sleeping.

use std::time::Instant;

use log::debug;

use crate::config::ToastTimings;
use crate::events::ToastEvent;
use crate::record::{Phase, ToastId, ToastRecord, ToastSpec};

/// Ordered collection of active toasts.
///
/// Created once per UI surface. Insertion order is preserved and `list()`
/// returns records oldest-first; consumers reverse for display if needed.
#[derive(Debug, Default)]
pub struct ToastManager {
    timings: ToastTimings,
    records: Vec<ToastRecord>,
    events: Vec<ToastEvent>,
}

impl ToastManager {
    /// Create a manager with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with explicit timings.
    #[must_use]
    pub fn with_timings(timings: ToastTimings) -> Self {
        Self {
            timings,
            records: Vec::new(),
            events: Vec::new(),
        }
    }

    /// The timing contract this manager enforces.
    pub fn timings(&self) -> &ToastTimings {
        &self.timings
    }

    /// Insert a new toast in `Entering` phase at the end of the collection.
    ///
    /// Returns the toast's id (generated unless the spec supplied one).
    /// Adding a spec whose supplied id is already active is a no-op that
    /// returns the existing id; ids are unique for the collection's
    /// lifetime.
    ///
    /// If a visible cap is configured and this insertion would exceed it,
    /// the oldest toast not already exiting is force-transitioned to
    /// `Exiting` first.
    pub fn add(&mut self, spec: impl Into<ToastSpec>, now: Instant) -> ToastId {
        let spec = spec.into();
        let id = spec.id.unwrap_or_else(ToastId::next);

        if self.records.iter().any(|r| r.id == id) {
            debug!("toast {id} already active, ignoring duplicate add");
            return id;
        }

        if let Some(max) = self.timings.max_visible {
            while self.records.iter().filter(|r| r.phase != Phase::Exiting).count() >= max {
                let Some(idx) = self.records.iter().position(|r| r.phase != Phase::Exiting)
                else {
                    break;
                };
                debug!("visible cap {max} reached, evicting toast {}", self.records[idx].id);
                self.begin_exit(idx, now);
            }
        }

        let duration = spec.duration.unwrap_or(self.timings.default_duration);
        let record = ToastRecord {
            id,
            kind: spec.kind,
            message: spec.message,
            duration,
            dismissible: spec.dismissible,
            phase: Phase::Entering,
            deadline: Some(now + self.timings.enter_delay),
        };
        debug!("toast {id} added ({}, {:?})", record.kind, duration);
        self.events.push(ToastEvent::Added(record.clone()));
        self.records.push(record);
        id
    }

    /// User-initiated dismissal.
    ///
    /// Starts the exit transition if the toast is entering or visible.
    /// Idempotent: dismissing a toast that is already exiting, already
    /// removed, or never existed is a no-op. Toasts created with
    /// `dismissible(false)` ignore this path (use [`remove`](Self::remove)
    /// for caller-side teardown).
    pub fn dismiss(&mut self, id: ToastId, now: Instant) {
        let Some(idx) = self.records.iter().position(|r| r.id == id) else {
            return;
        };
        if !self.records[idx].dismissible {
            debug!("toast {id} is not dismissible, ignoring dismiss");
            return;
        }
        match self.records[idx].phase {
            Phase::Entering | Phase::Visible => self.begin_exit(idx, now),
            Phase::Exiting | Phase::Dismissed => {}
        }
    }

    /// Remove a toast outright, bypassing the exit transition.
    ///
    /// Removing an absent id is a no-op, which absorbs the race between a
    /// user close and an in-flight timer completion. Emits `Removed` at
    /// most once per toast.
    pub fn remove(&mut self, id: ToastId) {
        let Some(idx) = self.records.iter().position(|r| r.id == id) else {
            return;
        };
        let mut record = self.records.remove(idx);
        record.phase = Phase::Dismissed;
        debug!("toast {id} removed");
        self.events.push(ToastEvent::PhaseChanged {
            id,
            phase: Phase::Dismissed,
        });
        self.events.push(ToastEvent::Removed(id));
    }

    /// Process every transition whose deadline has passed.
    ///
    /// Late ticks are fine: a toast whose enter, visible, and exit windows
    /// have all elapsed advances through each phase in order within one
    /// call, and follow-up deadlines chain from the scheduled instants
    /// rather than from `now`, so the contract "removal happens exactly
    /// `exit_delay` after entering `Exiting`" holds in logical time.
    pub fn tick(&mut self, now: Instant) {
        loop {
            let due = self
                .records
                .iter()
                .position(|r| r.deadline.is_some_and(|d| d <= now));
            let Some(idx) = due else { break };
            self.advance(idx);
        }
    }

    /// The earliest pending deadline across all toasts, if any.
    ///
    /// Drivers sleep until this instant and then call [`tick`](Self::tick).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.records.iter().filter_map(|r| r.deadline).min()
    }

    /// The current ordered sequence of active toasts, oldest first.
    pub fn list(&self) -> &[ToastRecord] {
        &self.records
    }

    /// Look up a single toast by id.
    pub fn get(&self, id: ToastId) -> Option<&ToastRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of active toasts (any phase except `Dismissed`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every toast immediately, emitting `Removed` for each.
    pub fn clear(&mut self) {
        let ids: Vec<ToastId> = self.records.iter().map(|r| r.id).collect();
        for id in ids {
            self.remove(id);
        }
    }

    /// Drain the accumulated outbound events.
    pub fn take_events(&mut self) -> Vec<ToastEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the record at `idx` past its due deadline.
    fn advance(&mut self, idx: usize) {
        let record = &mut self.records[idx];
        let Some(due) = record.deadline.take() else {
            return;
        };
        match record.phase {
            Phase::Entering => {
                record.phase = Phase::Visible;
                // Zero duration: persists until explicit dismissal.
                if !record.duration.is_zero() {
                    record.deadline = Some(due + record.duration);
                }
                let id = record.id;
                debug!("toast {id} visible");
                self.events.push(ToastEvent::PhaseChanged {
                    id,
                    phase: Phase::Visible,
                });
            }
            Phase::Visible => {
                record.phase = Phase::Exiting;
                record.deadline = Some(due + self.timings.exit_delay);
                let id = record.id;
                debug!("toast {id} auto-dismissing");
                self.events.push(ToastEvent::PhaseChanged {
                    id,
                    phase: Phase::Exiting,
                });
            }
            Phase::Exiting => {
                let id = record.id;
                self.remove(id);
            }
            // No deadline is ever scheduled for a dismissed record.
            Phase::Dismissed => {}
        }
    }

    /// Move the record at `idx` into `Exiting` now.
    fn begin_exit(&mut self, idx: usize, now: Instant) {
        let record = &mut self.records[idx];
        record.phase = Phase::Exiting;
        record.deadline = Some(now + self.timings.exit_delay);
        let id = record.id;
        debug!("toast {id} exiting");
        self.events.push(ToastEvent::PhaseChanged {
            id,
            phase: Phase::Exiting,
        });
    }
}
