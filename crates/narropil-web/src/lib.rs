#![forbid(unsafe_code)]

//! Browser host adapter for the Narropil site overlays.
//!
//! The page's JavaScript forwards trigger clicks, key presses, and pointer
//! presses as small JSON documents ([`input`]). [`PageHost`] turns them into
//! overlay commands, applies them, and hands back an
//! [`OverlayView`](narropil_overlay::OverlayView) for the styling layer.
//!
//! # Features
//!
//! - `input-parser` (default): JSON inputs and JSON views.
//! - `policy-config`: build the host from a TOML/JSON dismissal policy.
//! - `logging`: re-export of `narropil_core::logging::init`.
//!
//! On `wasm32` with `input-parser`, `NarropilPage` is exported through
//! `wasm-bindgen`.

pub mod host;
pub mod image;
#[cfg(feature = "input-parser")]
pub mod input;
#[cfg(all(target_arch = "wasm32", feature = "input-parser"))]
mod wasm;

pub use host::PageHost;
pub use image::{IMAGE_ROOT, resolve_image_src};
#[cfg(feature = "input-parser")]
pub use input::{HostInput, InputError, KeyPhase, PointerTarget, parse_input};
#[cfg(feature = "logging")]
pub use narropil_core::logging::init as init_logging;
#[cfg(all(target_arch = "wasm32", feature = "input-parser"))]
pub use wasm::NarropilPage;
