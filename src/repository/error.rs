use thiserror::Error;

use crate::todo::TodoId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("repository lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("todo {0} already exists")]
    Duplicate(TodoId),
    #[error("description {0:?} is already taken")]
    DescriptionTaken(String),
    #[error("todo {0} does not exist")]
    Missing(TodoId),
    #[error("stored todo could not be decoded: {0}")]
    Codec(String),
}
