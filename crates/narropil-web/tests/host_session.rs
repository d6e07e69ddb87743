#![forbid(unsafe_code)]
#![cfg(feature = "input-parser")]

//! Browser sessions replayed through the JSON host boundary.
//!
//! Each test feeds the inputs the page's JavaScript would send and checks
//! the JSON view it would apply to the DOM.
//!
//! Run: `cargo test -p narropil-web --test host_session`

use narropil_overlay::OverlayKind;
use narropil_web::{InputError, PageHost};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tracing_test::traced_test;

// =============================================================================
// Test Utilities
// =============================================================================

fn send(host: &mut PageHost, input: Value) -> Value {
    let out = host
        .handle_json(&input.to_string())
        .unwrap_or_else(|err| panic!("input {input} rejected: {err}"));
    serde_json::from_str(&out).expect("view is valid JSON")
}

fn surface<'a>(view: &'a Value, kind: OverlayKind) -> &'a Value {
    &view["surfaces"][kind.index()]
}

fn is_open(view: &Value, kind: OverlayKind) -> bool {
    surface(view, kind)["open"] == json!(true)
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn gallery_then_quick_view_then_escape() {
    let mut host = PageHost::default();

    let view = send(
        &mut host,
        json!({"type": "gallery", "src": "photos/sunset.jpg", "alt": "Sunset"}),
    );
    assert_eq!(
        surface(&view, OverlayKind::Lightbox),
        &json!({
            "kind": "lightbox",
            "open": true,
            "aria_hidden": false,
            "payload": {"type": "image", "image": "/images/sunset.jpg", "caption": "Sunset"},
        })
    );
    assert_eq!(view["scroll_locked"], json!(true));

    let view = send(
        &mut host,
        json!({
            "type": "quick_view",
            "image": "https://cdn.example.com/lamp.jpg",
            "title": "Lamp",
            "description": "Brass desk lamp",
            "price": "$40",
        }),
    );
    assert!(!is_open(&view, OverlayKind::Lightbox));
    assert_eq!(surface(&view, OverlayKind::Lightbox)["payload"], Value::Null);
    assert!(is_open(&view, OverlayKind::QuickView));
    assert_eq!(
        surface(&view, OverlayKind::QuickView)["payload"]["image"],
        json!("https://cdn.example.com/lamp.jpg")
    );
    assert_eq!(view["lock_count"], json!(1));

    let view = send(&mut host, json!({"type": "key", "key": "Escape"}));
    assert!(!is_open(&view, OverlayKind::QuickView));
    assert_eq!(view["scroll_locked"], json!(false));
    assert_eq!(view["lock_count"], json!(0));
}

#[test]
fn burger_and_mobile_link() {
    let mut host = PageHost::default();

    let view = send(&mut host, json!({"type": "burger"}));
    assert!(is_open(&view, OverlayKind::MobileDrawer));
    assert_eq!(surface(&view, OverlayKind::MobileDrawer)["aria_hidden"], json!(false));

    let view = send(&mut host, json!({"type": "mobile_link"}));
    assert!(!is_open(&view, OverlayKind::MobileDrawer));
    assert_eq!(view["scroll_locked"], json!(false));

    send(&mut host, json!({"type": "burger"}));
    let view = send(&mut host, json!({"type": "burger"}));
    assert!(!is_open(&view, OverlayKind::MobileDrawer), "burger toggles");
}

#[test]
fn drawer_keeps_page_locked_after_modal_backdrop_press() {
    let mut host = PageHost::default();
    send(&mut host, json!({"type": "burger"}));
    send(&mut host, json!({"type": "quick_view", "title": "Chair"}));

    let view = send(
        &mut host,
        json!({"type": "pointer_down", "target": "backdrop", "surface": "quickViewModal"}),
    );
    assert!(!is_open(&view, OverlayKind::QuickView));
    assert!(is_open(&view, OverlayKind::MobileDrawer));
    assert_eq!(view["scroll_locked"], json!(true));
}

#[test]
fn quick_view_without_image_shows_blank_image() {
    let mut host = PageHost::default();
    let view = send(&mut host, json!({"type": "quick_view", "title": "Chair"}));

    let payload = &surface(&view, OverlayKind::QuickView)["payload"];
    assert_eq!(payload["image"], json!(""));
    assert_eq!(payload["title"], json!("Chair"));
}

#[test]
fn press_inside_content_keeps_modal_open() {
    let mut host = PageHost::default();
    send(&mut host, json!({"type": "gallery", "src": "a.jpg"}));

    let view = send(
        &mut host,
        json!({"type": "pointer_down", "target": "content", "surface": "galleryLightbox"}),
    );
    assert!(is_open(&view, OverlayKind::Lightbox));
    assert_eq!(surface(&view, OverlayKind::Lightbox)["payload"]["caption"], json!(""));
}

#[test]
fn close_icon_and_repeat_close() {
    let mut host = PageHost::default();
    send(&mut host, json!({"type": "gallery", "src": "a.jpg"}));

    let once = send(&mut host, json!({"type": "close", "surface": "galleryLightbox"}));
    let twice = send(&mut host, json!({"type": "close", "surface": "lightbox"}));
    assert_eq!(once, twice);
    assert!(!is_open(&twice, OverlayKind::Lightbox));
}

#[test]
fn escape_with_nothing_open_changes_nothing() {
    let mut host = PageHost::default();
    let before = host.view_json().expect("view encodes");
    let after = host
        .handle_json(r#"{"type":"key","key":"Escape"}"#)
        .expect("escape is a valid input");
    assert_eq!(after, before);
}

// =============================================================================
// Rejected inputs
// =============================================================================

#[test]
#[traced_test]
fn unknown_surface_is_rejected_and_logged() {
    let mut host = PageHost::default();
    send(&mut host, json!({"type": "burger"}));
    let before = host.view();

    let err = host
        .handle_json(r#"{"type":"close","surface":"cartDrawer"}"#)
        .unwrap_err();
    assert!(matches!(err, InputError::UnknownSurface(_)));
    assert_eq!(host.view(), before);
    assert!(logs_contain("input names no overlay surface"));
}

#[test]
fn malformed_input_leaves_state_alone() {
    let mut host = PageHost::default();
    send(&mut host, json!({"type": "burger"}));
    let before = host.view();

    assert!(matches!(host.handle_json("not json"), Err(InputError::Json(_))));
    assert!(matches!(
        host.handle_json(r#"{"type":"quick_view","title":7}"#),
        Err(InputError::Json(_))
    ));
    assert_eq!(host.view(), before);
}
