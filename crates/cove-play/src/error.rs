//! Error types for the play state.

use thiserror::Error;

/// Result type for play-state operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Errors that can occur while building or running the play state.
#[derive(Debug, Error)]
pub enum PlayError {
    /// A map could not be built from its rows.
    #[error("invalid map: {0}")]
    InvalidMap(String),

    /// A play configuration value was out of range.
    #[error("invalid play config: {field} {reason}")]
    InvalidConfig {
        /// The offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Entity lookup or registration error.
    #[error("{0}")]
    Core(#[from] cove_core::CoveError),

    /// Theater configuration error.
    #[error("{0}")]
    Theater(#[from] cove_theater::TheaterError),
}
