//! Todo items whose completion is a domain event.
//!
//! A [`Todo`] enforces its own rules and, when completed, publishes
//! [`TodoCompleted`] through an [`EventDispatcher`]. The
//! [`CompletionNotifier`] handler turns that event into a
//! `"<description> is complete"` message for every observer of a
//! [`Broadcaster`] such as the [`NotificationHub`].

pub mod config;
pub mod dispatch;
pub mod notify;
pub mod repository;
pub mod service;
pub mod telemetry;
pub mod todo;

pub use config::{Config, ConfigError};
pub use dispatch::{
    DispatchError, DispatcherBuilder, DomainEvent, EventDispatcher, EventHandler, HandlerError,
    HandlerFailure,
};
pub use notify::{
    completion_message, BroadcastError, Broadcaster, CompletionNotifier, NotificationHub,
};
pub use repository::{InMemoryTodoRepository, RepositoryError, TodoRepository};
pub use service::{ServiceError, TodoService};
pub use todo::{
    validate_description, Todo, TodoCompleted, TodoId, TodoMemento, ValidationError,
    MIN_DESCRIPTION_LEN,
};
