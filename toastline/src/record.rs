//! Toast identity, severity, lifecycle phase, and record types.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::ToastError;

/// Unique identifier for a toast within a collection's lifetime.
///
/// Generated from a process-wide counter by default; callers that track
/// their own identities can supply one via [`ToastSpec::with_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocate the next process-unique id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a caller-managed raw id.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__toast_{}", self.0)
    }
}

/// Toast severity. Affects styling in the consumer, never the lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl FromStr for ToastKind {
    type Err = ToastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(ToastKind::Info),
            "success" => Ok(ToastKind::Success),
            "warning" => Ok(ToastKind::Warning),
            "error" => Ok(ToastKind::Error),
            other => Err(ToastError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        };
        f.write_str(name)
    }
}

/// Lifecycle phase of a single toast.
///
/// Phases advance strictly in order; `Dismissed` is terminal and a record
/// in that phase is removed from the collection in the same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Just inserted; lets a renderer commit initial layout before the
    /// visible styling applies.
    Entering,
    /// Settled on screen. The auto-dismiss timer (if any) runs here.
    Visible,
    /// Exit animation window. Always lasts exactly the exit delay.
    Exiting,
    /// Terminal. Never observable through `list()`.
    Dismissed,
}

/// Parameters for a new toast, consumed by
/// [`ToastManager::add`](crate::ToastManager::add).
///
/// # Example
///
/// ```ignore
/// manager.add(ToastSpec::success("Saved"), Instant::now());
/// manager.add(
///     ToastSpec::error("Connection failed")
///         .with_duration(Duration::ZERO)
///         .dismissible(true),
///     Instant::now(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ToastSpec {
    pub(crate) id: Option<ToastId>,
    pub(crate) kind: ToastKind,
    pub(crate) message: String,
    pub(crate) duration: Option<Duration>,
    pub(crate) dismissible: bool,
}

impl ToastSpec {
    /// Create a spec with an explicit kind.
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            message: message.into(),
            duration: None,
            dismissible: true,
        }
    }

    /// Create an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    /// Create a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    /// Create a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    /// Create an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Set how long the toast stays visible before auto-dismissing.
    ///
    /// `Duration::ZERO` means the toast persists until explicitly
    /// dismissed. Unset specs fall back to the manager's default duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the visible duration from a millisecond count.
    ///
    /// Rejects negative values; this is the validation surface for callers
    /// bridging from loosely-typed layers.
    pub fn duration_ms(self, ms: i64) -> Result<Self, ToastError> {
        if ms < 0 {
            return Err(ToastError::NegativeDuration(ms));
        }
        Ok(self.with_duration(Duration::from_millis(ms as u64)))
    }

    /// Set whether a user-initiated close is permitted.
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Supply a caller-managed id instead of generating one.
    pub fn with_id(mut self, id: ToastId) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<String> for ToastSpec {
    fn from(message: String) -> Self {
        ToastSpec::info(message)
    }
}

impl From<&str> for ToastSpec {
    fn from(message: &str) -> Self {
        ToastSpec::info(message)
    }
}

/// One active notification in the collection.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    pub(crate) id: ToastId,
    pub(crate) kind: ToastKind,
    pub(crate) message: String,
    pub(crate) duration: Duration,
    pub(crate) dismissible: bool,
    pub(crate) phase: Phase,
    /// When the next scheduled transition fires, if one is pending.
    pub(crate) deadline: Option<Instant>,
}

impl ToastRecord {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The configured visible duration. Zero means never auto-dismiss.
    /// Immutable after creation.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
