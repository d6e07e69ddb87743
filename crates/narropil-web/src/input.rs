#![forbid(unsafe_code)]

//! JSON input parser for browser-encoded page inputs.
//!
//! The browser glue serializes each relevant DOM interaction as one JSON
//! object with a `type` tag:
//!
//! | `type`         | Fields                                   | Command                     |
//! |----------------|------------------------------------------|-----------------------------|
//! | `quick_view`   | `image`, `title`, `description`, `price` | open quick view             |
//! | `gallery`      | `src`, `alt`                             | open lightbox               |
//! | `burger`       |                                          | toggle drawer               |
//! | `mobile_link`  |                                          | close drawer                |
//! | `close`        | `surface`                                | close that surface          |
//! | `key`          | `key`, `phase`, modifier flags           | dismissal signal            |
//! | `pointer_down` | `button`, `target`, `surface`            | dismissal signal            |
//!
//! Pressing Enter on a focused gallery thumbnail is sent as a `gallery`
//! input, the same as a click, so the lightbox stays keyboard reachable.
//!
//! Surface ids accept both the snake_case names and the page's element ids
//! (`quickViewModal`, `galleryLightbox`, `mobileNav`).
//!
//! # Failure Modes
//!
//! | Input                        | Result                          |
//! |------------------------------|---------------------------------|
//! | malformed JSON, unknown type | [`InputError::Json`]            |
//! | unknown surface id           | [`InputError::UnknownSurface`]  |
//! | pointer button beyond right  | `Ok(None)` (ignored)            |

use std::fmt;

use narropil_core::{
    Event, HitRegion, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerButton, PointerEvent,
    PointerEventKind,
};
use narropil_overlay::{
    ImagePreview, OverlayCommand, OverlayKind, Payload, ProductPreview, UnknownSurface,
};
use serde::Deserialize;

use crate::image::resolve_image_src;

/// Errors at the host input boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input was not a well-formed host input document.
    Json(String),
    /// A surface id named no overlay.
    UnknownSurface(UnknownSurface),
    /// The view snapshot could not be serialized.
    Encode(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "invalid host input: {msg}"),
            Self::UnknownSurface(err) => write!(f, "{err}"),
            Self::Encode(msg) => write!(f, "failed to encode overlay view: {msg}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownSurface(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UnknownSurface> for InputError {
    fn from(err: UnknownSurface) -> Self {
        Self::UnknownSurface(err)
    }
}

/// Key phase as reported by `keydown` / `keyup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPhase {
    #[default]
    Down,
    Up,
}

/// What the host's hit test found under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    /// The overlay element itself, outside its content box.
    Backdrop,
    /// Inside the overlay's content box.
    Content,
    /// Anywhere outside every overlay.
    #[default]
    Page,
}

/// One browser-encoded input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostInput {
    /// Quick-view button on a product card.
    QuickView {
        #[serde(default)]
        image: String,
        #[serde(default)]
        title: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        price: String,
    },
    /// Gallery thumbnail click.
    Gallery {
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
    /// Hamburger icon.
    Burger,
    /// Link inside the mobile drawer.
    MobileLink,
    /// Close icon of a surface.
    Close { surface: String },
    Key {
        key: String,
        #[serde(default)]
        phase: KeyPhase,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        meta: bool,
    },
    PointerDown {
        #[serde(default)]
        button: u8,
        #[serde(default)]
        target: PointerTarget,
        #[serde(default)]
        surface: Option<String>,
    },
}

impl HostInput {
    /// Translate into an overlay command.
    ///
    /// Returns `Ok(None)` for inputs the overlay layer has no use for.
    ///
    /// # Errors
    ///
    /// [`InputError::UnknownSurface`] when a surface id names no overlay.
    pub fn into_command(self) -> Result<Option<OverlayCommand>, InputError> {
        let command = match self {
            Self::QuickView {
                image,
                title,
                description,
                price,
            } => {
                let preview = ProductPreview::new()
                    .image(resolve_image_src(&image))
                    .title(title)
                    .description(description)
                    .price(price);
                OverlayCommand::Open {
                    kind: OverlayKind::QuickView,
                    payload: Some(Payload::Product(preview)),
                }
            }
            Self::Gallery { src, alt } => {
                let preview = ImagePreview::new(resolve_image_src(&src), alt.unwrap_or_default());
                OverlayCommand::Open {
                    kind: OverlayKind::Lightbox,
                    payload: Some(Payload::Image(preview)),
                }
            }
            Self::Burger => OverlayCommand::Toggle(OverlayKind::MobileDrawer),
            Self::MobileLink => OverlayCommand::Close(OverlayKind::MobileDrawer),
            Self::Close { surface } => OverlayCommand::Close(surface.parse()?),
            Self::Key {
                key,
                phase,
                shift,
                ctrl,
                alt,
                meta,
            } => {
                let mut modifiers = Modifiers::empty();
                modifiers.set(Modifiers::SHIFT, shift);
                modifiers.set(Modifiers::CTRL, ctrl);
                modifiers.set(Modifiers::ALT, alt);
                modifiers.set(Modifiers::META, meta);
                let kind = match phase {
                    KeyPhase::Down => KeyEventKind::Press,
                    KeyPhase::Up => KeyEventKind::Release,
                };
                let event = KeyEvent::press(KeyCode::from_dom_key(&key))
                    .with_modifiers(modifiers)
                    .with_kind(kind);
                OverlayCommand::Dismiss(Event::Key(event))
            }
            Self::PointerDown {
                button,
                target,
                surface,
            } => {
                let Some(button) = PointerButton::from_dom_button(button) else {
                    tracing::trace!(button, "pointer button ignored");
                    return Ok(None);
                };
                let mut event = PointerEvent::new(PointerEventKind::Down(button));
                let region = match target {
                    PointerTarget::Backdrop => Some(HitRegion::Backdrop),
                    PointerTarget::Content => Some(HitRegion::Content),
                    PointerTarget::Page => None,
                };
                if let Some(region) = region
                    && let Some(surface) = surface
                {
                    let kind: OverlayKind = surface.parse()?;
                    event = event.with_hit(kind.hit_id(), region);
                }
                OverlayCommand::Dismiss(Event::Pointer(event))
            }
        };
        Ok(Some(command))
    }
}

/// Parse one JSON-encoded host input into an overlay command.
///
/// # Errors
///
/// See the module-level failure modes.
pub fn parse_input(json: &str) -> Result<Option<OverlayCommand>, InputError> {
    let input: HostInput =
        serde_json::from_str(json).map_err(|err| InputError::Json(err.to_string()))?;
    input.into_command()
}
