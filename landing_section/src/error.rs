//! Error types for loading landing configuration.

use std::path::PathBuf;

/// Errors raised while loading a [`crate::config::LandingConfig`].
///
/// Rendering and animation never fail; configuration is the only fallible
/// input to the crate.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for the expected schema
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// TOML deserialization failure
        #[source]
        source: toml::de::Error,
    },
    /// A zero timing interval would re-arm the timer without ever yielding
    #[error("timing.{field} must be greater than zero")]
    ZeroInterval {
        /// Name of the offending `[timing]` key
        field: &'static str,
    },
}
