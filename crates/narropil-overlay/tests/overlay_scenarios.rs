#![forbid(unsafe_code)]

//! Page-level overlay scenarios.
//!
//! # Invariants
//!
//! 1. **Exclusivity**: quick view and lightbox are never open together.
//! 2. **Shared lock**: the drawer next to a modal keeps the page frozen until
//!    both close.
//! 3. **Idle dismissal**: Escape or a backdrop press with nothing open changes
//!    nothing.
//! 4. **Idempotent close**: a second close is invisible.
//!
//! Run: `cargo test -p narropil-overlay --test overlay_scenarios`

use narropil_core::{
    Event, HitRegion, KeyCode, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerEventKind,
};
use narropil_overlay::{
    Cause, DismissReason, ImagePreview, OverlayCommand, OverlayConfig, OverlayCoordinator,
    OverlayKind, Payload, ProductPreview, SurfacePolicy, SurfaceState, Transition,
};
use pretty_assertions::assert_eq;

// =============================================================================
// Test Utilities
// =============================================================================

fn sunset() -> Payload {
    ImagePreview::new("a.jpg", "Sunset").into()
}

fn lamp() -> Payload {
    ProductPreview::new().title("Lamp").price("$40").into()
}

fn open(kind: OverlayKind, payload: Option<Payload>) -> OverlayCommand {
    OverlayCommand::Open { kind, payload }
}

fn backdrop(kind: OverlayKind) -> Event {
    Event::backdrop_press(kind.hit_id())
}

// =============================================================================
// Exclusivity
// =============================================================================

#[test]
fn quick_view_replaces_lightbox() {
    let mut overlays = OverlayCoordinator::new();
    overlays.dispatch(open(OverlayKind::Lightbox, Some(sunset())));
    overlays.dispatch(open(OverlayKind::QuickView, Some(lamp())));

    assert_eq!(overlays.surface(OverlayKind::Lightbox).state(), SurfaceState::Closed);
    assert_eq!(overlays.surface(OverlayKind::QuickView).state(), SurfaceState::Open);
    assert_eq!(overlays.exclusive(), Some(OverlayKind::QuickView));
}

#[test]
fn lightbox_replaces_quick_view() {
    let mut overlays = OverlayCoordinator::new();
    overlays.dispatch(open(OverlayKind::QuickView, Some(lamp())));
    let records = overlays.dispatch(open(OverlayKind::Lightbox, Some(sunset())));

    assert_eq!(records[0].kind, OverlayKind::QuickView);
    assert_eq!(records[0].cause, Cause::Displaced { by: OverlayKind::Lightbox });
    assert!(!overlays.is_open(OverlayKind::QuickView));
    assert!(overlays.is_open(OverlayKind::Lightbox));
}

#[test]
fn drawer_does_not_displace_modal() {
    let mut overlays = OverlayCoordinator::new();
    overlays.dispatch(open(OverlayKind::QuickView, Some(lamp())));
    let records = overlays.dispatch(OverlayCommand::Toggle(OverlayKind::MobileDrawer));

    assert_eq!(records.len(), 1, "no displacement record");
    assert!(overlays.is_open(OverlayKind::QuickView));
    assert!(overlays.is_open(OverlayKind::MobileDrawer));
}

// =============================================================================
// Shared scroll lock
// =============================================================================

#[test]
fn drawer_and_quick_view_share_the_lock() {
    let mut overlays = OverlayCoordinator::new();
    overlays.dispatch(open(OverlayKind::QuickView, Some(lamp())));
    overlays.dispatch(open(OverlayKind::MobileDrawer, None));
    assert_eq!(overlays.scroll_lock().count(), 2);

    overlays.dispatch(OverlayCommand::Close(OverlayKind::MobileDrawer));
    assert!(overlays.scroll_lock().is_locked(), "quick view still open");

    overlays.dispatch(OverlayCommand::Close(OverlayKind::QuickView));
    assert!(!overlays.scroll_lock().is_locked());
}

#[test]
fn closing_modal_first_keeps_drawer_lock() {
    let mut overlays = OverlayCoordinator::new();
    overlays.dispatch(open(OverlayKind::MobileDrawer, None));
    overlays.dispatch(open(OverlayKind::Lightbox, Some(sunset())));

    overlays.dispatch(OverlayCommand::Dismiss(backdrop(OverlayKind::Lightbox)));
    assert!(overlays.is_open(OverlayKind::MobileDrawer));
    assert_eq!(overlays.scroll_lock().count(), 1);
}

// =============================================================================
// Dismissal
// =============================================================================

#[test]
fn idle_dismissal_is_invisible() {
    let mut overlays = OverlayCoordinator::new();
    let before = overlays.view();

    for event in [
        Event::escape(),
        backdrop(OverlayKind::QuickView),
        backdrop(OverlayKind::Lightbox),
        backdrop(OverlayKind::MobileDrawer),
    ] {
        assert!(overlays.dispatch(OverlayCommand::Dismiss(event)).is_empty());
    }
    assert_eq!(overlays.view(), before);
}

#[test]
fn escape_closes_single_modal_and_restores_scroll() {
    let mut overlays = OverlayCoordinator::new();
    overlays.dispatch(open(OverlayKind::Lightbox, Some(sunset())));

    let records = overlays.handle_event(&Event::escape());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].transition, Transition::Closed);
    assert_eq!(records[0].cause, Cause::Dismissed(DismissReason::Escape));
    assert!(!overlays.scroll_lock().is_locked());
}

#[test]
fn escape_with_modifiers_still_dismisses() {
    let mut overlays = OverlayCoordinator::new();
    overlays.dispatch(open(OverlayKind::QuickView, Some(lamp())));
    let event = Event::Key(KeyEvent::press(KeyCode::Escape).with_modifiers(Modifiers::CTRL));
    overlays.handle_event(&event);
    assert!(!overlays.is_open(OverlayKind::QuickView));
}

#[test]
fn backdrop_press_restores_scroll_when_last_holder() {
    let mut overlays = OverlayCoordinator::new();
    overlays.dispatch(open(OverlayKind::QuickView, Some(lamp())));
    let records = overlays.handle_event(&backdrop(OverlayKind::QuickView));
    assert_eq!(records[0].cause, Cause::Dismissed(DismissReason::Backdrop));
    assert!(!overlays.scroll_lock().is_locked());
}

#[test]
fn pointer_release_on_backdrop_is_ignored() {
    let mut overlays = OverlayCoordinator::new();
    overlays.dispatch(open(OverlayKind::Lightbox, Some(sunset())));
    let up = Event::Pointer(
        PointerEvent::new(PointerEventKind::Up(PointerButton::Left))
            .with_hit(OverlayKind::Lightbox.hit_id(), HitRegion::Backdrop),
    );
    assert!(overlays.handle_event(&up).is_empty());
    assert!(overlays.is_open(OverlayKind::Lightbox));
}

#[test]
fn policy_can_pin_drawer_against_escape() {
    let config = OverlayConfig::default().with_policy(
        OverlayKind::MobileDrawer,
        SurfacePolicy::default().close_on_escape(false),
    );
    let mut overlays = OverlayCoordinator::with_config(config);
    overlays.dispatch(open(OverlayKind::MobileDrawer, None));
    overlays.dispatch(open(OverlayKind::QuickView, Some(lamp())));

    overlays.handle_event(&Event::escape());
    assert!(!overlays.is_open(OverlayKind::QuickView));
    assert!(overlays.is_open(OverlayKind::MobileDrawer));
    assert!(overlays.scroll_lock().is_locked());
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn double_close_equals_single_close() {
    let mut once = OverlayCoordinator::new();
    let mut twice = OverlayCoordinator::new();
    for overlays in [&mut once, &mut twice] {
        overlays.dispatch(open(OverlayKind::QuickView, Some(lamp())));
        overlays.dispatch(open(OverlayKind::MobileDrawer, None));
        overlays.dispatch(OverlayCommand::Close(OverlayKind::QuickView));
    }
    let second = twice.dispatch(OverlayCommand::Close(OverlayKind::QuickView));

    assert_eq!(second[0].transition, Transition::AlreadyClosed);
    assert_eq!(twice.view(), once.view());
}

#[test]
fn rapid_repeated_open_acquires_once() {
    let mut overlays = OverlayCoordinator::new();
    for _ in 0..5 {
        overlays.dispatch(open(OverlayKind::Lightbox, Some(sunset())));
    }
    assert_eq!(overlays.scroll_lock().count(), 1);
    overlays.dispatch(OverlayCommand::Close(OverlayKind::Lightbox));
    assert_eq!(overlays.scroll_lock().count(), 0);
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn lightbox_then_quick_view_then_escape() {
    let mut overlays = OverlayCoordinator::new();

    overlays.dispatch(open(OverlayKind::Lightbox, Some(sunset())));
    assert!(overlays.is_open(OverlayKind::Lightbox));
    assert_eq!(overlays.surface(OverlayKind::Lightbox).payload(), Some(&sunset()));
    assert_eq!(overlays.scroll_lock().count(), 1);

    overlays.dispatch(open(OverlayKind::QuickView, Some(lamp())));
    assert!(!overlays.is_open(OverlayKind::Lightbox));
    assert_eq!(overlays.surface(OverlayKind::Lightbox).payload(), None);
    assert_eq!(overlays.scroll_lock().count(), 1);
    assert!(overlays.is_open(OverlayKind::QuickView));

    overlays.dispatch(OverlayCommand::Dismiss(Event::escape()));
    assert!(!overlays.is_open(OverlayKind::QuickView));
    assert_eq!(overlays.scroll_lock().count(), 0);
    assert!(!overlays.scroll_lock().is_locked());
}
