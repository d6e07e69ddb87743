#![forbid(unsafe_code)]

//! Image reference resolution for trigger data.

use std::borrow::Cow;

/// Path prefix under which the site serves its own images.
pub const IMAGE_ROOT: &str = "/images/";

/// Resolve an image reference read from a product card or gallery thumbnail.
///
/// Absolute `http`/`https` references pass through unchanged. Anything else
/// is reduced to its file name and served from [`IMAGE_ROOT`], so
/// `assets/photos/lamp.jpg` becomes `/images/lamp.jpg`. An empty reference
/// stays empty so the surface shows no image.
#[must_use]
pub fn resolve_image_src(src: &str) -> Cow<'_, str> {
    if src.is_empty() || src.starts_with("http") {
        return Cow::Borrowed(src);
    }
    let file_name = src.rsplit_once('/').map_or(src, |(_, name)| name);
    Cow::Owned(format!("{IMAGE_ROOT}{file_name}"))
}
