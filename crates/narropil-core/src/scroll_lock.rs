#![forbid(unsafe_code)]

//! Page-wide background scroll lock.
//!
//! Every overlay that covers the page freezes background scrolling while it is
//! open. Several overlays can be open at once (the mobile drawer next to a
//! modal), so the lock is a reference count rather than a flag: the page only
//! scrolls again once the last holder has released it.
//!
//! # Invariants
//!
//! 1. `count()` never underflows; `release()` at zero is a no-op.
//! 2. `is_locked()` iff `count() > 0`.
//! 3. The [`ScrollSink`] is told `true` exactly on the 0 -> 1 edge and `false`
//!    exactly on the 1 -> 0 edge, never in between.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Release without acquire | Mismatched overlay bookkeeping | Ignored, logged at `warn` |

use std::fmt;

/// Receiver for scroll lock edges, e.g. the glue that toggles
/// `body { overflow: hidden }`.
pub trait ScrollSink {
    /// Called when background scrolling becomes frozen (`true`) or free (`false`).
    fn set_scroll_locked(&mut self, locked: bool);
}

impl<F: FnMut(bool)> ScrollSink for F {
    fn set_scroll_locked(&mut self, locked: bool) {
        self(locked);
    }
}

/// Reference-counted background scroll lock.
#[derive(Default)]
pub struct ScrollLock {
    count: u32,
    sink: Option<Box<dyn ScrollSink>>,
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("count", &self.count)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl ScrollLock {
    /// An unlocked lock with no sink attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An unlocked lock that reports edges to `sink`.
    #[must_use]
    pub fn with_sink(sink: impl ScrollSink + 'static) -> Self {
        Self {
            count: 0,
            sink: Some(Box::new(sink)),
        }
    }

    /// Number of holders currently requiring the lock.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Whether background scrolling is frozen.
    #[inline]
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.count > 0
    }

    /// Take one hold on the lock.
    ///
    /// Returns `true` when this call froze the page (0 -> 1).
    pub fn acquire(&mut self) -> bool {
        self.count = self.count.saturating_add(1);
        let edge = self.count == 1;
        tracing::trace!(count = self.count, "scroll lock acquired");
        if edge {
            tracing::debug!("background scroll locked");
            self.notify(true);
        }
        edge
    }

    /// Drop one hold on the lock.
    ///
    /// Returns `true` when this call freed the page (1 -> 0).
    pub fn release(&mut self) -> bool {
        if self.count == 0 {
            tracing::warn!("scroll lock released with no outstanding holds");
            return false;
        }
        self.count -= 1;
        tracing::trace!(count = self.count, "scroll lock released");
        let edge = self.count == 0;
        if edge {
            tracing::debug!("background scroll restored");
            self.notify(false);
        }
        edge
    }

    fn notify(&mut self, locked: bool) {
        if let Some(sink) = self.sink.as_mut() {
            sink.set_scroll_locked(locked);
        }
    }
}
