#![forbid(unsafe_code)]

//! Page host: owns the overlay coordinator for one page and feeds it inputs.
//!
//! The browser glue calls [`PageHost::handle_json`] for every relevant DOM
//! interaction and applies the returned view: the `open` class and
//! `aria-hidden` per surface, and `overflow: hidden` on the body while
//! `scroll_locked` is set.
//!
//! # Failure Modes
//!
//! | Failure              | Effect                                      |
//! |----------------------|---------------------------------------------|
//! | malformed input      | `Err(InputError::Json)`, state unchanged    |
//! | unknown surface id   | warn log, `Err(InputError::UnknownSurface)` |
//! | ignored input        | current view returned, state unchanged      |

use narropil_core::{ScrollLock, ScrollSink};
use narropil_overlay::{
    OverlayCommand, OverlayConfig, OverlayCoordinator, OverlayView, TransitionRecord,
};

#[cfg(feature = "input-parser")]
use crate::input::{InputError, parse_input};

/// One page's overlay state.
#[derive(Debug, Default)]
pub struct PageHost {
    overlays: OverlayCoordinator,
}

impl PageHost {
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            overlays: OverlayCoordinator::with_config(config),
        }
    }

    /// Build a host from a TOML dismissal policy document.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`](narropil_overlay::ConfigError) from parsing.
    #[cfg(feature = "policy-config")]
    pub fn from_toml(source: &str) -> Result<Self, narropil_overlay::ConfigError> {
        OverlayConfig::from_toml_str(source).map(Self::new)
    }

    /// Forward scroll lock edges to `sink` (e.g. the body style writer).
    #[must_use]
    pub fn with_scroll_sink(mut self, sink: impl ScrollSink + 'static) -> Self {
        self.overlays = self.overlays.with_scroll_lock(ScrollLock::with_sink(sink));
        self
    }

    #[must_use]
    pub const fn overlays(&self) -> &OverlayCoordinator {
        &self.overlays
    }

    #[must_use]
    pub fn view(&self) -> OverlayView {
        self.overlays.view()
    }

    /// Apply one command and return the resulting view.
    pub fn apply(&mut self, command: OverlayCommand) -> OverlayView {
        let records = self.overlays.dispatch(command);
        log_transitions(&records);
        self.overlays.view()
    }

    /// Parse a JSON host input, apply it, and return the view as JSON.
    ///
    /// # Errors
    ///
    /// See the module-level failure modes. On error nothing is applied.
    #[cfg(feature = "input-parser")]
    pub fn handle_json(&mut self, input: &str) -> Result<String, InputError> {
        let command = match parse_input(input) {
            Ok(command) => command,
            Err(InputError::UnknownSurface(err)) => {
                tracing::warn!(surface = %err.0, "input names no overlay surface");
                return Err(InputError::UnknownSurface(err));
            }
            Err(err) => {
                tracing::debug!(error = %err, "host input rejected");
                return Err(err);
            }
        };
        let view = match command {
            Some(command) => self.apply(command),
            None => self.view(),
        };
        encode_view(&view)
    }

    /// Current view as JSON.
    ///
    /// # Errors
    ///
    /// [`InputError::Encode`] if serialization fails.
    #[cfg(feature = "input-parser")]
    pub fn view_json(&self) -> Result<String, InputError> {
        encode_view(&self.view())
    }
}

fn log_transitions(records: &[TransitionRecord]) {
    for record in records.iter().filter(|r| r.transition.changed()) {
        tracing::trace!(
            surface = %record.kind,
            transition = ?record.transition,
            cause = ?record.cause,
            "page overlay transition"
        );
    }
}

#[cfg(feature = "input-parser")]
fn encode_view(view: &OverlayView) -> Result<String, InputError> {
    serde_json::to_string(view).map_err(|err| InputError::Encode(err.to_string()))
}
