#![forbid(unsafe_code)]

//! A single overlay surface and its open/closed state machine.
//!
//! ```text
//! Closed --open()--> Open --close()--> Closed
//! Open   --open()--> Open     (no side effects)
//! Closed --close()-> Closed   (no side effects)
//! ```
//!
//! # Invariants
//!
//! 1. The surface holds exactly one scroll lock hold while `Open` and none
//!    while `Closed`.
//! 2. The surface is registered with the router iff it is `Open`.
//! 3. `payload()` is `Some` iff the surface is `Open` and carries payloads.
//!
//! Surfaces do not know about each other. Exclusivity between the quick view
//! and the lightbox is enforced by the [`OverlayCoordinator`](crate::OverlayCoordinator).

use narropil_core::{HitId, ScrollLock};

use crate::kind::{OverlayKind, SurfaceState};
use crate::payload::Payload;
use crate::router::DismissalRouter;

/// What an `open()` or `close()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Transition {
    Opened,
    /// `open()` on an open surface; nothing changed.
    AlreadyOpen,
    Closed,
    /// `close()` on a closed surface; nothing changed.
    AlreadyClosed,
}

impl Transition {
    /// Whether the surface changed state.
    #[inline]
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Opened | Self::Closed)
    }
}

/// Open/closed state plus content for one overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySurface {
    kind: OverlayKind,
    state: SurfaceState,
    payload: Option<Payload>,
}

impl OverlaySurface {
    /// A closed surface.
    #[must_use]
    pub const fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            state: SurfaceState::Closed,
            payload: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> OverlayKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SurfaceState {
        self.state
    }

    /// The flag the styling layer reacts to.
    #[inline]
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, SurfaceState::Open)
    }

    /// Content shown while open.
    #[must_use]
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Hit id for this surface's backdrop and content regions.
    #[inline]
    #[must_use]
    pub const fn hit_id(&self) -> HitId {
        self.kind.hit_id()
    }

    /// Open the surface with `payload`.
    ///
    /// Content-bearing surfaces opened without a payload show a blank one.
    /// The drawer ignores any payload. Opening an open surface changes
    /// nothing, including the payload already on display.
    pub fn open(
        &mut self,
        payload: Option<Payload>,
        lock: &mut ScrollLock,
        router: &mut DismissalRouter,
    ) -> Transition {
        if self.is_open() {
            tracing::trace!(surface = %self.kind, "open ignored, already open");
            return Transition::AlreadyOpen;
        }

        self.payload = if self.kind.carries_payload() {
            payload.or_else(|| Payload::blank_for(self.kind))
        } else {
            if payload.is_some() {
                tracing::trace!(surface = %self.kind, "payload ignored");
            }
            None
        };
        self.state = SurfaceState::Open;
        lock.acquire();
        router.register(self.kind);

        tracing::debug!(surface = %self.kind, lock_count = lock.count(), "overlay opened");
        Transition::Opened
    }

    /// Close the surface, dropping its payload and its scroll lock hold.
    pub fn close(&mut self, lock: &mut ScrollLock, router: &mut DismissalRouter) -> Transition {
        if !self.is_open() {
            tracing::trace!(surface = %self.kind, "close ignored, already closed");
            return Transition::AlreadyClosed;
        }

        self.state = SurfaceState::Closed;
        self.payload = None;
        lock.release();
        router.unregister(self.kind);

        tracing::debug!(surface = %self.kind, lock_count = lock.count(), "overlay closed");
        Transition::Closed
    }
}
