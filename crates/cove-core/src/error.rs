use crate::entity::EntityId;

/// Alias for `Result<T, CoveError>`.
pub type CoveResult<T> = Result<T, CoveError>;

/// Errors that can occur when manipulating entities and maps.
#[derive(Debug, thiserror::Error)]
pub enum CoveError {
    /// The requested entity ID does not exist.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// An entity with the same ID is already registered.
    #[error("entity already exists: {0}")]
    DuplicateEntity(EntityId),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
