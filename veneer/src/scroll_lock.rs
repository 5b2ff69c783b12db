//! Page scroll locking as an explicit acquisition.
//!
//! Overlays that cover the page (an open sidebar, a modal) suppress
//! background scrolling for as long as they are up. Rather than a
//! free-standing global flag that every exit path must remember to reset,
//! the lock is an acquisition: holding a [`ScrollLockGuard`] keeps the page
//! locked, dropping it releases — including on abrupt teardown.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared scroll-lock state for one page/surface.
///
/// Cheap to clone; all clones count acquisitions against the same lock, so
/// two overlapping overlays keep the page locked until both are gone.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    count: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock. The page stays locked while the guard lives.
    #[must_use]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            count: Arc::clone(&self.count),
        }
    }

    /// Whether any guard is currently held.
    pub fn is_locked(&self) -> bool {
        self.count.load(Ordering::SeqCst) > 0
    }

    /// Number of live guards.
    pub fn depth(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// RAII handle for one scroll-lock acquisition.
#[derive(Debug)]
pub struct ScrollLockGuard {
    count: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}
