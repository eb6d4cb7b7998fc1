mod error;
mod in_memory;
mod repository;

pub use error::RepositoryError;
pub use in_memory::InMemoryTodoRepository;
pub use repository::TodoRepository;
