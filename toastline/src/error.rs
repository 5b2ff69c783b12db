//! Error types for the toast engine.

use thiserror::Error;

/// Errors rejected synchronously at the loosely-typed boundary.
///
/// The typed API cannot express these states (`std::time::Duration` is
/// unsigned and [`ToastKind`](crate::ToastKind) is a closed enum), so they
/// only arise when bridging from untyped callers: millisecond integers via
/// [`ToastSpec::duration_ms`](crate::ToastSpec::duration_ms) and kind names
/// via `ToastKind::from_str`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToastError {
    /// A duration below zero was supplied. Zero is valid and means
    /// "never auto-dismiss"; negatives are rejected outright.
    #[error("toast duration must be >= 0, got {0} ms")]
    NegativeDuration(i64),

    /// A kind name that is not one of success/error/warning/info.
    #[error("unknown toast kind '{0}'")]
    UnknownKind(String),
}
