//! Application service for todos.
//!
//! `TodoService<R>` owns a repository and the event dispatcher. Each method
//! loads a fresh aggregate, applies one operation and persists the result.
//!
//! Policies that live here rather than on the aggregate:
//! - descriptions are unique across todos (checked on create),
//! - the nil id never addresses a todo for get/update/complete, while delete
//!   accepts it as a no-op.

use tracing::{info, warn};

use crate::dispatch::EventDispatcher;
use crate::repository::{RepositoryError, TodoRepository};
use crate::todo::{validate_description, Todo, TodoId};

use super::error::ServiceError;

pub struct TodoService<R> {
    repo: R,
    events: EventDispatcher,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: R, events: EventDispatcher) -> Self {
        TodoService { repo, events }
    }

    /// Create a todo. `None` models a request without a description.
    pub fn create(&self, description: Option<&str>) -> Result<Todo, ServiceError> {
        let todo = Todo::create(validate_description(description)?)?;
        self.repo.add_unique(&todo).map_err(|err| match err {
            RepositoryError::DescriptionTaken(taken) => ServiceError::Duplicate(taken),
            other => other.into(),
        })?;
        info!(id = %todo.id(), "todo created");
        Ok(todo)
    }

    pub fn get(&self, id: TodoId) -> Result<Todo, ServiceError> {
        self.load(id)
    }

    pub fn list(&self) -> Result<Vec<Todo>, ServiceError> {
        Ok(self.repo.all()?)
    }

    pub fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.repo.count()?)
    }

    /// Change the description. Completion cannot be set through here.
    pub fn update(&self, id: TodoId, description: Option<&str>) -> Result<Todo, ServiceError> {
        let mut todo = self.load(id)?;
        todo.describe(validate_description(description)?)?;
        self.repo.replace(&todo)?;
        info!(%id, "todo updated");
        Ok(todo)
    }

    /// Complete a todo and notify observers.
    ///
    /// The completion event is published before the todo is written back. If a
    /// handler fails the error is returned and the stored todo keeps its
    /// previous state.
    pub fn complete(&self, id: TodoId) -> Result<Todo, ServiceError> {
        let mut todo = self.load(id)?;
        if let Err(err) = todo.complete(&self.events) {
            warn!(%id, error = %err, "completion not persisted");
            return Err(err.into());
        }
        self.repo.replace(&todo)?;
        info!(%id, "todo completed");
        Ok(todo)
    }

    /// Remove a todo. Unknown ids, including the nil id, are ignored.
    pub fn delete(&self, id: TodoId) -> Result<(), ServiceError> {
        self.repo.remove(id)?;
        info!(%id, "todo deleted");
        Ok(())
    }

    fn load(&self, id: TodoId) -> Result<Todo, ServiceError> {
        if !id.is_valid_reference() {
            return Err(ServiceError::NotFound(id));
        }
        self.repo.lookup(id)?.ok_or(ServiceError::NotFound(id))
    }
}
