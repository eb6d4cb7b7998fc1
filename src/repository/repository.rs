use crate::todo::{Todo, TodoId};

use super::error::RepositoryError;

/// Storage for todos, keyed by id and ordered by insertion.
///
/// Every todo handed out is a fresh copy rebuilt from stored state; changing
/// it has no effect until it is passed back to [`replace`](Self::replace).
pub trait TodoRepository: Send + Sync {
    /// `Ok(None)` when no todo has this id.
    fn lookup(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError>;

    /// Fails with [`RepositoryError::Duplicate`] if the id is already stored.
    fn add(&self, todo: &Todo) -> Result<(), RepositoryError>;

    /// Like [`add`](Self::add), but also fails with
    /// [`RepositoryError::DescriptionTaken`] if a stored todo has exactly the
    /// same description. The check and the insert are one atomic step.
    fn add_unique(&self, todo: &Todo) -> Result<(), RepositoryError>;

    /// Fails with [`RepositoryError::Missing`] if the id is not stored.
    fn replace(&self, todo: &Todo) -> Result<(), RepositoryError>;

    /// Removing an absent id is not an error.
    fn remove(&self, id: TodoId) -> Result<(), RepositoryError>;

    /// All todos in insertion order.
    fn all(&self) -> Result<Vec<Todo>, RepositoryError>;

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.all()?.len())
    }
}
