//! Error types for the fuzzyrank crate.

use thiserror::Error;

use crate::distance::Score;

/// Result type alias for fuzzyrank operations.
pub type Result<T> = std::result::Result<T, FuzzyError>;

/// Errors that can occur while configuring or running an extraction.
#[derive(Debug, Error)]
pub enum FuzzyError {
    /// Multi-field extraction was given no fields to score
    #[error("No accessor supplied: multi-field extraction needs at least one field")]
    MissingAccessor,

    /// Best-match lookup over an empty collection
    #[error("Cannot select a best match from an empty collection")]
    EmptyCollection,

    /// Every candidate scored below the cutoff
    #[error("No candidate reached the cutoff of {cutoff}")]
    NoMatch {
        /// Cutoff in effect
        cutoff: Score,
    },

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unrecognized strategy name
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Unrecognized processor name
    #[error("Unknown processor: {0}")]
    UnknownProcessor(String),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error code for integration with the workspace-wide error code ranges.
/// Range: 11xxx for fuzzy matching errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzyErrorCode {
    /// No accessor for multi-field scoring
    MissingAccessor = 11001,
    /// Empty input collection
    EmptyCollection = 11002,
    /// Nothing above the cutoff
    NoMatch = 11003,
    /// Invalid configuration value
    InvalidConfig = 11004,
    /// Unknown strategy or processor name
    UnknownName = 11005,
    /// Config parsing or reading failed
    ConfigLoad = 11006,
}

impl FuzzyError {
    /// Returns the error code for this error.
    pub fn code(&self) -> FuzzyErrorCode {
        match self {
            FuzzyError::MissingAccessor => FuzzyErrorCode::MissingAccessor,
            FuzzyError::EmptyCollection => FuzzyErrorCode::EmptyCollection,
            FuzzyError::NoMatch { .. } => FuzzyErrorCode::NoMatch,
            FuzzyError::InvalidConfig(_) => FuzzyErrorCode::InvalidConfig,
            FuzzyError::UnknownStrategy(_) | FuzzyError::UnknownProcessor(_) => {
                FuzzyErrorCode::UnknownName
            }
            FuzzyError::Toml(_) | FuzzyError::Io(_) => FuzzyErrorCode::ConfigLoad,
        }
    }

    /// Returns true for caller-contract violations, as opposed to I/O failures.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, FuzzyError::EmptyCollection | FuzzyError::NoMatch { .. } | FuzzyError::Io(_))
    }
}
