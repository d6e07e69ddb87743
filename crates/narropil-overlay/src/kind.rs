#![forbid(unsafe_code)]

//! Overlay identities and open/closed state.

use std::fmt;
use std::str::FromStr;

use narropil_core::HitId;

/// First hit id handed to overlay surfaces. Kept high so host-side hit ids for
/// ordinary page controls never collide.
const BASE_HIT_ID: u32 = 1000;

/// The overlay surfaces on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OverlayKind {
    /// Product quick-view modal.
    QuickView,
    /// Gallery image lightbox.
    Lightbox,
    /// Mobile navigation drawer.
    MobileDrawer,
}

impl OverlayKind {
    /// Every surface, in index order.
    pub const ALL: [Self; 3] = [Self::QuickView, Self::Lightbox, Self::MobileDrawer];

    /// Whether this surface belongs to the exclusive class: at most one
    /// exclusive surface may be open at a time.
    #[inline]
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, Self::QuickView | Self::Lightbox)
    }

    /// Whether this surface displays a content payload.
    #[inline]
    #[must_use]
    pub const fn carries_payload(self) -> bool {
        matches!(self, Self::QuickView | Self::Lightbox)
    }

    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuickView => "quick_view",
            Self::Lightbox => "lightbox",
            Self::MobileDrawer => "mobile_drawer",
        }
    }

    /// Position in [`OverlayKind::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::QuickView => 0,
            Self::Lightbox => 1,
            Self::MobileDrawer => 2,
        }
    }

    /// Hit id the host must attach to this surface's backdrop and content.
    #[inline]
    #[must_use]
    pub const fn hit_id(self) -> HitId {
        HitId::new(BASE_HIT_ID + self.index() as u32)
    }

    /// Reverse of [`OverlayKind::hit_id`].
    #[must_use]
    pub fn from_hit_id(id: HitId) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.hit_id() == id)
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A surface id string that names no overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSurface(pub String);

impl fmt::Display for UnknownSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown overlay surface: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSurface {}

impl FromStr for OverlayKind {
    type Err = UnknownSurface;

    /// Accepts the snake_case names and the page's element ids
    /// (`quickViewModal`, `galleryLightbox`, `mobileNav`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick_view" | "quickViewModal" => Ok(Self::QuickView),
            "lightbox" | "galleryLightbox" => Ok(Self::Lightbox),
            "mobile_drawer" | "mobileNav" => Ok(Self::MobileDrawer),
            other => Err(UnknownSurface(other.to_owned())),
        }
    }
}

/// Open/closed state of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SurfaceState {
    #[default]
    Closed,
    Open,
}
