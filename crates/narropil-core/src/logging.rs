#![forbid(unsafe_code)]

//! Logging setup.
//!
//! All crates in this workspace log through `tracing`. Nothing is printed
//! until a subscriber is installed; [`init`] installs a `tracing-subscriber`
//! fmt layer (JSON lines with the `tracing-json` feature).
//!
//! The filter is read from `NARROPIL_LOG`, then `RUST_LOG`, falling back to
//! [`DEFAULT_FILTER`].

/// Filter used when neither `NARROPIL_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

/// Environment variable consulted first for the log filter.
pub const FILTER_ENV: &str = "NARROPIL_LOG";

/// Errors from logging setup.
#[derive(Debug, Clone)]
pub enum LoggingError {
    /// A global subscriber was already installed.
    AlreadyInstalled(String),
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInstalled(msg) => write!(f, "logging already installed: {msg}"),
        }
    }
}

impl std::error::Error for LoggingError {}

/// Install the global `tracing` subscriber.
///
/// # Errors
///
/// [`LoggingError::AlreadyInstalled`] if a global subscriber exists.
#[cfg(feature = "logging")]
pub fn init() -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    #[cfg(feature = "tracing-json")]
    let result = builder.json().try_init();
    #[cfg(not(feature = "tracing-json"))]
    let result = builder.try_init();

    result.map_err(|err| LoggingError::AlreadyInstalled(err.to_string()))
}
