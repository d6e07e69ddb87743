#![forbid(unsafe_code)]

//! Snapshot of overlay state for the styling layer.
//!
//! The styling layer toggles an `open` class and `aria-hidden` per surface
//! and `overflow: hidden` on the page body. It reads all of that from an
//! [`OverlayView`]; it never inspects surfaces directly.

use crate::kind::OverlayKind;
use crate::payload::Payload;
use crate::surface::OverlaySurface;

/// What the styling layer needs to know about one surface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceView {
    pub kind: OverlayKind,
    pub open: bool,
    pub aria_hidden: bool,
    pub payload: Option<Payload>,
}

impl SurfaceView {
    #[must_use]
    pub fn from_surface(surface: &OverlaySurface) -> Self {
        Self {
            kind: surface.kind(),
            open: surface.is_open(),
            aria_hidden: !surface.is_open(),
            payload: surface.payload().cloned(),
        }
    }
}

/// Overlay state of the whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayView {
    /// One entry per surface, in [`OverlayKind::ALL`] order.
    pub surfaces: [SurfaceView; 3],
    pub scroll_locked: bool,
    pub lock_count: u32,
}

impl OverlayView {
    #[must_use]
    pub fn surface(&self, kind: OverlayKind) -> &SurfaceView {
        &self.surfaces[kind.index()]
    }

    /// Kinds currently open, in index order.
    pub fn open_kinds(&self) -> impl Iterator<Item = OverlayKind> + '_ {
        self.surfaces.iter().filter(|s| s.open).map(|s| s.kind)
    }
}
