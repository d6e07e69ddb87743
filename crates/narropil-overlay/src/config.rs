#![forbid(unsafe_code)]

//! Per-surface dismissal policy.
//!
//! By default every surface closes on Escape and on a backdrop press. The
//! policy can be loaded from TOML or JSON with the `policy-config` feature:
//!
//! ```toml
//! [mobile_drawer]
//! close_on_backdrop = false
//! ```
//!
//! Omitted surfaces and fields keep their defaults.

use crate::kind::OverlayKind;

/// How a single surface reacts to dismissal signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SurfacePolicy {
    pub close_on_escape: bool,
    pub close_on_backdrop: bool,
}

impl Default for SurfacePolicy {
    fn default() -> Self {
        Self {
            close_on_escape: true,
            close_on_backdrop: true,
        }
    }
}

impl SurfacePolicy {
    /// Set whether Escape closes the surface.
    #[must_use]
    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    /// Set whether a backdrop press closes the surface.
    #[must_use]
    pub fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }
}

/// Dismissal policy for every surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OverlayConfig {
    pub quick_view: SurfacePolicy,
    pub lightbox: SurfacePolicy,
    pub mobile_drawer: SurfacePolicy,
}

impl OverlayConfig {
    /// Policy for `kind`.
    #[must_use]
    pub const fn policy(&self, kind: OverlayKind) -> SurfacePolicy {
        match kind {
            OverlayKind::QuickView => self.quick_view,
            OverlayKind::Lightbox => self.lightbox,
            OverlayKind::MobileDrawer => self.mobile_drawer,
        }
    }

    /// Replace the policy for `kind`.
    #[must_use]
    pub fn with_policy(mut self, kind: OverlayKind, policy: SurfacePolicy) -> Self {
        match kind {
            OverlayKind::QuickView => self.quick_view = policy,
            OverlayKind::Lightbox => self.lightbox = policy,
            OverlayKind::MobileDrawer => self.mobile_drawer = policy,
        }
        self
    }
}

/// Errors from loading an [`OverlayConfig`].
#[cfg(feature = "policy-config")]
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    Toml(String),
    /// The JSON document could not be parsed.
    Json(String),
}

#[cfg(feature = "policy-config")]
impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml(msg) => write!(f, "invalid overlay config (toml): {msg}"),
            Self::Json(msg) => write!(f, "invalid overlay config (json): {msg}"),
        }
    }
}

#[cfg(feature = "policy-config")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "policy-config")]
impl OverlayConfig {
    /// Parse a TOML policy document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Toml`] when the document is malformed or has wrong types.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|err| ConfigError::Toml(err.to_string()))
    }

    /// Parse a JSON policy document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] when the document is malformed or has wrong types.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|err| ConfigError::Json(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_close_on_everything() {
        let config = OverlayConfig::default();
        for kind in OverlayKind::ALL {
            assert_eq!(config.policy(kind), SurfacePolicy::default());
            assert!(config.policy(kind).close_on_escape);
            assert!(config.policy(kind).close_on_backdrop);
        }
    }

    #[test]
    fn with_policy_targets_one_surface() {
        let config = OverlayConfig::default().with_policy(
            OverlayKind::Lightbox,
            SurfacePolicy::default().close_on_escape(false),
        );
        assert!(!config.policy(OverlayKind::Lightbox).close_on_escape);
        assert!(config.policy(OverlayKind::Lightbox).close_on_backdrop);
        assert!(config.policy(OverlayKind::QuickView).close_on_escape);
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn toml_overrides_keep_defaults() {
        let config = OverlayConfig::from_toml_str(
            r#"
            [mobile_drawer]
            close_on_backdrop = false
            "#,
        )
        .expect("valid toml");
        assert!(!config.mobile_drawer.close_on_backdrop);
        assert!(config.mobile_drawer.close_on_escape);
        assert_eq!(config.quick_view, SurfacePolicy::default());
    }

    #[cfg(feature = "policy-config")]
    #[test]
    fn json_and_errors() {
        let config =
            OverlayConfig::from_json_str(r#"{"quick_view":{"close_on_escape":false}}"#)
                .expect("valid json");
        assert!(!config.quick_view.close_on_escape);

        let err = OverlayConfig::from_toml_str("quick_view = 3").expect_err("wrong type");
        assert!(err.to_string().starts_with("invalid overlay config (toml)"));
        let err = OverlayConfig::from_json_str("{").expect_err("truncated");
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
