#![forbid(unsafe_code)]

//! Shared primitives for the Narropil page overlays.
//!
//! - [`event`]: host-agnostic key and pointer events, plus the hit-test tags
//!   that tell a backdrop press apart from a press on overlay content.
//! - [`scroll_lock`]: the page-wide, reference-counted background scroll lock.
//! - [`logging`]: `tracing` subscriber installation (feature `logging`).

pub mod event;
pub mod logging;
pub mod scroll_lock;

pub use event::{
    Event, HitId, HitRegion, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerButton,
    PointerEvent, PointerEventKind,
};
pub use scroll_lock::{ScrollLock, ScrollSink};
