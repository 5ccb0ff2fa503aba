/// Alias for `Result<T, TheaterError>`.
pub type TheaterResult<T> = Result<T, TheaterError>;

/// Errors raised while setting up the theater.
///
/// Ticking, rendering, and querying never fail; only configuration does.
#[derive(Debug, thiserror::Error)]
pub enum TheaterError {
    /// A configuration value is out of range.
    #[error("invalid theater config: {field} {reason}")]
    InvalidConfig {
        /// The offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
