use std::sync::{Arc, RwLock};

use crate::todo::{Todo, TodoId, TodoMemento};

use super::error::RepositoryError;
use super::repository::TodoRepository;

#[derive(Clone, Debug)]
struct StoredTodo {
    id: TodoId,
    data: Vec<u8>,
}

/// In-memory todo storage backed by `Arc<RwLock<Vec<_>>>`.
///
/// Each todo is kept as its bitcode-encoded memento, so every read decodes an
/// independent aggregate. Cloning shares the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    records: Arc<RwLock<Vec<StoredTodo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn encode(todo: &Todo) -> Result<StoredTodo, RepositoryError> {
    let data = bitcode::serialize(&todo.snapshot())
        .map_err(|e| RepositoryError::Codec(e.to_string()))?;
    Ok(StoredTodo {
        id: todo.id(),
        data,
    })
}

fn decode(record: &StoredTodo) -> Result<Todo, RepositoryError> {
    let memento: TodoMemento =
        bitcode::deserialize(&record.data).map_err(|e| RepositoryError::Codec(e.to_string()))?;
    Ok(Todo::restore(memento))
}

impl TodoRepository for InMemoryTodoRepository {
    fn lookup(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("lookup"))?;
        records
            .iter()
            .find(|record| record.id == id)
            .map(decode)
            .transpose()
    }

    fn add(&self, todo: &Todo) -> Result<(), RepositoryError> {
        let record = encode(todo)?;
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("add"))?;
        if records.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Duplicate(record.id));
        }
        records.push(record);
        Ok(())
    }

    fn add_unique(&self, todo: &Todo) -> Result<(), RepositoryError> {
        let record = encode(todo)?;
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("add_unique"))?;
        for existing in records.iter() {
            if existing.id == record.id {
                return Err(RepositoryError::Duplicate(record.id));
            }
            if decode(existing)?.description() == todo.description() {
                return Err(RepositoryError::DescriptionTaken(
                    todo.description().to_string(),
                ));
            }
        }
        records.push(record);
        Ok(())
    }

    fn replace(&self, todo: &Todo) -> Result<(), RepositoryError> {
        let record = encode(todo)?;
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("replace"))?;
        let slot = records
            .iter_mut()
            .find(|existing| existing.id == record.id)
            .ok_or(RepositoryError::Missing(record.id))?;
        *slot = record;
        Ok(())
    }

    fn remove(&self, id: TodoId) -> Result<(), RepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("remove"))?;
        records.retain(|record| record.id != id);
        Ok(())
    }

    fn all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("all"))?;
        records.iter().map(decode).collect()
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("count"))?;
        Ok(records.len())
    }
}
