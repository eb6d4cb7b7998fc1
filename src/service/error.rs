//! Error type for application-level todo operations.

use thiserror::Error;

use crate::dispatch::DispatchError;
use crate::repository::RepositoryError;
use crate::todo::{TodoId, ValidationError};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The description failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No todo with this id, or the id is the nil sentinel.
    #[error("todo not found: {0}")]
    NotFound(TodoId),
    /// Another todo already has this description.
    #[error("a todo described as {0:?} already exists")]
    Duplicate(String),
    /// A completion handler failed; the completed state was not persisted.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::Duplicate(_) => 409,
            ServiceError::Dispatch(_) => 502,
            ServiceError::Repository(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ServiceError::from(ValidationError::Blank).status_code(), 400);
        assert_eq!(ServiceError::NotFound(TodoId::nil()).status_code(), 404);
        assert_eq!(ServiceError::Duplicate("Ololosh".into()).status_code(), 409);
        assert_eq!(
            ServiceError::from(RepositoryError::LockPoisoned("add")).status_code(),
            500
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            ServiceError::from(ValidationError::TooShort { length: 1, min: 2 }).to_string(),
            "description must be at least 2 characters (got 1)"
        );
        assert_eq!(
            ServiceError::Duplicate("Ololosh".into()).to_string(),
            "a todo described as \"Ololosh\" already exists"
        );
    }
}
