#![forbid(unsafe_code)]

//! Overlay surfaces for the Narropil site: product quick view, gallery
//! lightbox, and mobile navigation drawer.
//!
//! # Architecture
//!
//! - [`OverlaySurface`]: one open/closed state machine per [`OverlayKind`],
//!   holding an opaque [`Payload`] while open.
//! - [`ScrollLock`](narropil_core::ScrollLock): shared, reference-counted
//!   background scroll lock. Surfaces acquire on open and release on close.
//! - [`DismissalRouter`]: knows which surfaces are open and turns Escape or a
//!   backdrop press into the surfaces to close.
//! - [`OverlayCoordinator`]: owns all of the above and is the single entry
//!   point for [`OverlayCommand`]s. It keeps the exclusive-class surfaces
//!   (quick view, lightbox) mutually exclusive.
//!
//! # Invariants
//!
//! 1. At most one exclusive-class surface is open.
//! 2. A surface is registered with the router iff it is open.
//! 3. The lock count equals the number of open surfaces.
//! 4. A payload is held only while its surface is open.
//!
//! # Example
//!
//! ```
//! use narropil_core::Event;
//! use narropil_overlay::{ImagePreview, OverlayCoordinator, OverlayKind, Payload, ProductPreview};
//!
//! let mut overlays = OverlayCoordinator::new();
//! overlays.request_open(
//!     OverlayKind::Lightbox,
//!     Some(Payload::Image(ImagePreview::new("a.jpg", "Sunset"))),
//! );
//! overlays.request_open(
//!     OverlayKind::QuickView,
//!     Some(Payload::Product(ProductPreview::new().title("Lamp").price("$40"))),
//! );
//! assert!(!overlays.is_open(OverlayKind::Lightbox));
//! assert_eq!(overlays.scroll_lock().count(), 1);
//!
//! overlays.handle_event(&Event::escape());
//! assert!(!overlays.scroll_lock().is_locked());
//! ```

pub mod config;
pub mod coordinator;
pub mod kind;
pub mod payload;
pub mod router;
pub mod surface;
pub mod view;

pub use config::{OverlayConfig, SurfacePolicy};
#[cfg(feature = "policy-config")]
pub use config::ConfigError;
pub use coordinator::{Cause, OverlayCommand, OverlayCoordinator, TransitionRecord};
pub use kind::{OverlayKind, SurfaceState, UnknownSurface};
pub use payload::{ImagePreview, Payload, ProductPreview};
pub use router::{DismissReason, Dismissal, DismissalRouter};
pub use surface::{OverlaySurface, Transition};
pub use view::{OverlayView, SurfaceView};
