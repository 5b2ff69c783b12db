//! Timing and capacity configuration for the toast engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between insertion and the `Entering -> Visible` transition.
/// Long enough for a renderer to commit initial layout, short enough to
/// be imperceptible.
pub const DEFAULT_ENTER_DELAY: Duration = Duration::from_millis(10);

/// Length of the `Exiting` window before a toast is removed.
pub const DEFAULT_EXIT_DELAY: Duration = Duration::from_millis(300);

/// Visible duration applied when a spec does not set one.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(4);

/// Timing contract and capacity policy for a [`ToastManager`](crate::ToastManager).
///
/// All fields are fixed for the manager's lifetime; per-toast durations come
/// from the spec at `add` time and are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    /// Delay before a freshly added toast becomes `Visible`.
    pub enter_delay: Duration,
    /// Exact length of the `Exiting` phase, for every toast.
    pub exit_delay: Duration,
    /// Visible duration for specs that do not set their own.
    pub default_duration: Duration,
    /// Maximum simultaneously active toasts. When an `add` would exceed it,
    /// the oldest toast not already exiting is force-transitioned to
    /// `Exiting`. `None` disables the cap.
    pub max_visible: Option<usize>,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_delay: DEFAULT_ENTER_DELAY,
            exit_delay: DEFAULT_EXIT_DELAY,
            default_duration: DEFAULT_DURATION,
            max_visible: None,
        }
    }
}

impl ToastTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enter delay.
    pub fn enter_delay(mut self, delay: Duration) -> Self {
        self.enter_delay = delay;
        self
    }

    /// Set the exit delay.
    pub fn exit_delay(mut self, delay: Duration) -> Self {
        self.exit_delay = delay;
        self
    }

    /// Set the fallback visible duration.
    pub fn default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    /// Cap the number of simultaneously active toasts.
    pub fn max_visible(mut self, max: usize) -> Self {
        self.max_visible = Some(max);
        self
    }
}
