//! Error types for the CLI binary.
//!
//! [`CliError`] wraps every failure mode so `main` can propagate with `?`.

/// Top-level error for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: forage_core::ConfigError,
    },

    /// The scenario file could not be read.
    #[error("failed to read scenario: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The scenario file is not a valid scenario.
    #[error("failed to parse scenario YAML: {source}")]
    Scenario {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },

    /// A candidate could not be classified.
    #[error("classification failed: {source}")]
    Classify {
        /// The underlying classification error.
        #[from]
        source: forage_core::ClassifyError,
    },

    /// The decision could not be written as JSON.
    #[error("failed to encode decision: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
