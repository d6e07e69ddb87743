#![forbid(unsafe_code)]

//! Dismissal routing for open overlays.
//!
//! The router tracks which surfaces are open, in the order they opened, and
//! decides which of them a dismissal signal targets. It never closes anything
//! itself: the coordinator closes every target through
//! [`OverlaySurface::close`](crate::OverlaySurface::close), so lock release
//! and unregistration happen the same way for every close path.
//!
//! # Routing rules
//!
//! | Signal | Targets |
//! |--------|---------|
//! | Escape press | every active surface with `close_on_escape`, most recent first |
//! | Left press on a surface's backdrop | that surface, if active and `close_on_backdrop` |
//! | Left press on content or the page | none |
//! | Anything while nothing is active | none |
//!
//! # Invariants
//!
//! - Each kind appears in the active list at most once.
//! - Later registrations sit later in the list (LIFO order on [`top`](DismissalRouter::top)).

use narropil_core::{Event, PointerButton, PointerEvent, PointerEventKind};

use crate::config::OverlayConfig;
use crate::kind::OverlayKind;

/// Why a surface is being dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DismissReason {
    /// Escape was pressed.
    Escape,
    /// The backdrop around the surface was pressed.
    Backdrop,
}

/// Result of routing a dismissal signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dismissal {
    pub reason: DismissReason,
    /// Surfaces to close, most recently opened first. Never empty.
    pub targets: Vec<OverlayKind>,
}

/// Registry of open surfaces eligible for dismissal.
#[derive(Debug, Clone, Default)]
pub struct DismissalRouter {
    active: Vec<OverlayKind>,
}

impl DismissalRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `kind` to the active set. Returns `false` if it was already there.
    pub fn register(&mut self, kind: OverlayKind) -> bool {
        if self.active.contains(&kind) {
            return false;
        }
        self.active.push(kind);
        true
    }

    /// Remove `kind` from the active set. Returns `false` if it was absent.
    pub fn unregister(&mut self, kind: OverlayKind) -> bool {
        let Some(idx) = self.active.iter().position(|k| *k == kind) else {
            return false;
        };
        self.active.remove(idx);
        true
    }

    #[must_use]
    pub fn is_active(&self, kind: OverlayKind) -> bool {
        self.active.contains(&kind)
    }

    /// Active surfaces, oldest first.
    #[must_use]
    pub fn active(&self) -> &[OverlayKind] {
        &self.active
    }

    /// Most recently registered surface.
    #[must_use]
    pub fn top(&self) -> Option<OverlayKind> {
        self.active.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Decide which surfaces `event` dismisses.
    ///
    /// Returns `None` when the event is not a dismissal signal or targets no
    /// active surface.
    #[must_use]
    pub fn route(&self, event: &Event, config: &OverlayConfig) -> Option<Dismissal> {
        if self.active.is_empty() {
            return None;
        }

        match event {
            _ if event.is_escape_press() => {
                let targets: Vec<OverlayKind> = self
                    .active
                    .iter()
                    .rev()
                    .copied()
                    .filter(|kind| config.policy(*kind).close_on_escape)
                    .collect();
                (!targets.is_empty()).then_some(Dismissal {
                    reason: DismissReason::Escape,
                    targets,
                })
            }
            Event::Pointer(
                pointer @ PointerEvent {
                    kind: PointerEventKind::Down(PointerButton::Left),
                    ..
                },
            ) => {
                let kind = pointer.backdrop_hit().and_then(OverlayKind::from_hit_id)?;
                (self.is_active(kind) && config.policy(kind).close_on_backdrop).then(|| {
                    Dismissal {
                        reason: DismissReason::Backdrop,
                        targets: vec![kind],
                    }
                })
            }
            _ => None,
        }
    }
}
