#![forbid(unsafe_code)]

//! Overlay coordinator: the single entry point for overlay requests.
//!
//! Trigger controls never touch surfaces directly. They send an
//! [`OverlayCommand`] to [`OverlayCoordinator::dispatch`] (or call the
//! matching method), which enforces exclusivity and keeps scroll lock
//! accounting in one place.
//!
//! # Invariants
//!
//! 1. At most one exclusive-class surface (quick view, lightbox) is open.
//!    Opening one while the other is open closes the other first, through its
//!    own `close()`. The page stays scroll-locked across that hand-off.
//! 2. The mobile drawer is not exclusive; it may be open next to either.
//! 3. `scroll_lock().count()` equals the number of open surfaces.
//! 4. Every close path (request, exclusivity, dismissal) goes through
//!    [`OverlaySurface::close`].
//!
//! # Concurrency
//!
//! The coordinator is a plain `&mut self` state machine owned by the page's
//! event dispatcher. Each call runs to completion before the next event is
//! delivered, so the dismissal router always sees the latest state.

use narropil_core::{Event, ScrollLock};

use crate::config::OverlayConfig;
use crate::kind::OverlayKind;
use crate::payload::Payload;
use crate::router::{DismissReason, DismissalRouter};
use crate::surface::{OverlaySurface, Transition};
use crate::view::{OverlayView, SurfaceView};

/// A request from a trigger control or the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayCommand {
    /// Open a surface (quick-view button, gallery thumbnail).
    Open {
        kind: OverlayKind,
        payload: Option<Payload>,
    },
    /// Close a surface (close icon, mobile link).
    Close(OverlayKind),
    /// Open if closed, close if open (hamburger icon).
    Toggle(OverlayKind),
    /// A raw input event that may be a dismissal signal.
    Dismiss(Event),
}

/// Why a transition happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// Explicit open/close/toggle request.
    Request,
    /// Closed to make room for another exclusive surface.
    Displaced { by: OverlayKind },
    /// Closed by a routed dismissal signal.
    Dismissed(DismissReason),
}

/// One surface transition produced by a coordinator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRecord {
    pub kind: OverlayKind,
    pub transition: Transition,
    pub cause: Cause,
}

/// Owner of every surface, the scroll lock, and the dismissal router.
#[derive(Debug)]
pub struct OverlayCoordinator {
    surfaces: [OverlaySurface; 3],
    lock: ScrollLock,
    router: DismissalRouter,
    config: OverlayConfig,
    exclusive: Option<OverlayKind>,
}

impl Default for OverlayCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayCoordinator {
    /// All surfaces closed, default dismissal policy, no scroll sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(OverlayConfig::default())
    }

    #[must_use]
    pub fn with_config(config: OverlayConfig) -> Self {
        Self {
            surfaces: OverlayKind::ALL.map(OverlaySurface::new),
            lock: ScrollLock::new(),
            router: DismissalRouter::new(),
            config,
            exclusive: None,
        }
    }

    /// Replace the scroll lock, e.g. with one wired to the page's
    /// [`ScrollSink`](narropil_core::ScrollSink).
    ///
    /// The new lock is brought to one hold per open surface, so a sink
    /// attached while overlays are open sees the `true` edge immediately.
    #[must_use]
    pub fn with_scroll_lock(mut self, mut lock: ScrollLock) -> Self {
        let open = self.router.len();
        while (lock.count() as usize) < open {
            lock.acquire();
        }
        while (lock.count() as usize) > open {
            lock.release();
        }
        if open > 0 {
            tracing::debug!(lock_count = lock.count(), "scroll lock replaced with overlays open");
        }
        self.lock = lock;
        debug_assert!(self.invariants_hold());
        self
    }

    // --- State Queries ---

    #[must_use]
    pub fn surface(&self, kind: OverlayKind) -> &OverlaySurface {
        &self.surfaces[kind.index()]
    }

    #[must_use]
    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.surface(kind).is_open()
    }

    /// The open exclusive-class surface, if any.
    #[must_use]
    pub const fn exclusive(&self) -> Option<OverlayKind> {
        self.exclusive
    }

    #[must_use]
    pub const fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }

    #[must_use]
    pub const fn router(&self) -> &DismissalRouter {
        &self.router
    }

    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Snapshot for the styling layer.
    #[must_use]
    pub fn view(&self) -> OverlayView {
        OverlayView {
            surfaces: self.surfaces.each_ref().map(SurfaceView::from_surface),
            scroll_locked: self.lock.is_locked(),
            lock_count: self.lock.count(),
        }
    }

    // --- Commands ---

    /// Apply a command and report every transition it caused, in order.
    pub fn dispatch(&mut self, command: OverlayCommand) -> Vec<TransitionRecord> {
        match command {
            OverlayCommand::Open { kind, payload } => self.request_open(kind, payload),
            OverlayCommand::Close(kind) => self.request_close(kind),
            OverlayCommand::Toggle(kind) => self.toggle(kind),
            OverlayCommand::Dismiss(event) => self.handle_event(&event),
        }
    }

    /// Open `kind`, first closing the other exclusive surface if `kind` is
    /// exclusive.
    pub fn request_open(
        &mut self,
        kind: OverlayKind,
        payload: Option<Payload>,
    ) -> Vec<TransitionRecord> {
        let mut records = Vec::with_capacity(2);

        // The hand-off hold keeps the page frozen between the displaced
        // surface's release and the new surface's acquire.
        let mut hand_off = false;
        if kind.is_exclusive()
            && let Some(current) = self.exclusive
            && current != kind
        {
            tracing::debug!(surface = %current, by = %kind, "closing exclusive overlay");
            hand_off = true;
            self.lock.acquire();
            records.push(self.close_surface(current, Cause::Displaced { by: kind }));
        }

        let surface = &mut self.surfaces[kind.index()];
        let transition = surface.open(payload, &mut self.lock, &mut self.router);
        if hand_off {
            self.lock.release();
        }
        if kind.is_exclusive() {
            self.exclusive = Some(kind);
        }
        records.push(TransitionRecord {
            kind,
            transition,
            cause: Cause::Request,
        });

        debug_assert!(self.invariants_hold());
        records
    }

    /// Close `kind`. Closing a closed surface is a no-op.
    pub fn request_close(&mut self, kind: OverlayKind) -> Vec<TransitionRecord> {
        let record = self.close_surface(kind, Cause::Request);
        debug_assert!(self.invariants_hold());
        vec![record]
    }

    /// Open `kind` if it is closed, otherwise close it.
    pub fn toggle(&mut self, kind: OverlayKind) -> Vec<TransitionRecord> {
        if self.is_open(kind) {
            self.request_close(kind)
        } else {
            let payload = Payload::blank_for(kind);
            self.request_open(kind, payload)
        }
    }

    /// Route `event` through the dismissal router and close every target.
    ///
    /// Returns no records when the event is not a dismissal signal or nothing
    /// is open.
    pub fn handle_event(&mut self, event: &Event) -> Vec<TransitionRecord> {
        let Some(dismissal) = self.router.route(event, &self.config) else {
            return Vec::new();
        };

        tracing::debug!(
            reason = ?dismissal.reason,
            targets = dismissal.targets.len(),
            "dismissal routed"
        );
        let cause = Cause::Dismissed(dismissal.reason);
        let records = dismissal
            .targets
            .into_iter()
            .map(|kind| self.close_surface(kind, cause))
            .collect();

        debug_assert!(self.invariants_hold());
        records
    }

    /// Close every open surface, most recently opened first.
    pub fn close_all(&mut self) -> Vec<TransitionRecord> {
        let open: Vec<OverlayKind> = self.router.active().iter().rev().copied().collect();
        open.into_iter()
            .map(|kind| self.close_surface(kind, Cause::Request))
            .collect()
    }

    fn close_surface(&mut self, kind: OverlayKind, cause: Cause) -> TransitionRecord {
        let transition = self.surfaces[kind.index()].close(&mut self.lock, &mut self.router);
        if self.exclusive == Some(kind) {
            self.exclusive = None;
        }
        TransitionRecord {
            kind,
            transition,
            cause,
        }
    }

    fn invariants_hold(&self) -> bool {
        let open = self.surfaces.iter().filter(|s| s.is_open()).count();
        let exclusive_open = self
            .surfaces
            .iter()
            .filter(|s| s.is_open() && s.kind().is_exclusive())
            .count();
        exclusive_open <= 1
            && self.lock.count() as usize == open
            && self.router.len() == open
            && self
                .surfaces
                .iter()
                .all(|s| s.is_open() == self.router.is_active(s.kind()))
            && self.exclusive.is_none_or(|kind| self.is_open(kind))
    }
}
