#![forbid(unsafe_code)]

//! Content shown inside content-bearing overlays.
//!
//! Payloads are opaque display records: the overlay layer stores them while a
//! surface is open and drops them on close. No field is validated; a missing
//! field is shown blank.

use crate::kind::OverlayKind;

/// Product card data for the quick view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ProductPreview {
    pub image: String,
    pub title: String,
    pub description: String,
    pub price: String,
}

impl ProductPreview {
    /// A blank preview.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }
}

/// Gallery image data for the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ImagePreview {
    pub image: String,
    pub caption: String,
}

impl ImagePreview {
    #[must_use]
    pub fn new(image: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            caption: caption.into(),
        }
    }
}

/// Display record supplied by the trigger that opened a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Payload {
    Product(ProductPreview),
    Image(ImagePreview),
}

impl Payload {
    /// The blank record a content-bearing surface shows when opened without
    /// one. `None` for surfaces that display no payload.
    #[must_use]
    pub fn blank_for(kind: OverlayKind) -> Option<Self> {
        match kind {
            OverlayKind::QuickView => Some(Self::Product(ProductPreview::default())),
            OverlayKind::Lightbox => Some(Self::Image(ImagePreview::default())),
            OverlayKind::MobileDrawer => None,
        }
    }

    /// Image reference of either variant.
    #[must_use]
    pub fn image(&self) -> &str {
        match self {
            Self::Product(p) => &p.image,
            Self::Image(i) => &i.image,
        }
    }

    /// Whether every field is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Product(p) => *p == ProductPreview::default(),
            Self::Image(i) => *i == ImagePreview::default(),
        }
    }
}

impl From<ProductPreview> for Payload {
    fn from(value: ProductPreview) -> Self {
        Self::Product(value)
    }
}

impl From<ImagePreview> for Payload {
    fn from(value: ImagePreview) -> Self {
        Self::Image(value)
    }
}
