//! Outbound events raised by the toast engine for the rendering layer.

use crate::record::{Phase, ToastId, ToastRecord};

/// A state change the consumer should react to.
///
/// Events accumulate inside the manager and are drained with
/// [`ToastManager::take_events`](crate::ToastManager::take_events); the
/// async host forwards them over a channel instead.
#[derive(Debug, Clone)]
pub enum ToastEvent {
    /// A toast was inserted (in `Entering` phase).
    Added(ToastRecord),
    /// A toast moved to a new lifecycle phase.
    PhaseChanged { id: ToastId, phase: Phase },
    /// A toast left the collection. Fired exactly once per toast.
    Removed(ToastId),
}

impl ToastEvent {
    /// The id of the toast this event concerns.
    pub fn id(&self) -> ToastId {
        match self {
            ToastEvent::Added(record) => record.id(),
            ToastEvent::PhaseChanged { id, .. } => *id,
            ToastEvent::Removed(id) => *id,
        }
    }
}
