use crate::types::DbId;

/// Domain-level error type shared by all capdraft crates.
///
/// The API layer maps these onto HTTP statuses in its `AppError` type;
/// repository code maps row lookups onto `NotFound` where an entity is
/// required to exist.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id came up empty.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed input: bad time text, bad roster shape, wrong slot
    /// count or category composition on submit.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A write was attempted after the game's roster-lock instant.
    #[error("Roster locked: {0}")]
    Locked(String),

    /// Missing, invalid, or expired session token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A conflicting write (e.g. duplicate result for the same athlete).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for building a `Validation` error from anything printable.
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }
}
