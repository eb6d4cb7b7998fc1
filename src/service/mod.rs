//! Application layer for todos.
//!
//! `TodoService<R>` applies the application policies on top of the aggregate
//! and a [`TodoRepository`](crate::repository::TodoRepository). With the
//! `http` feature, [`http::router`] exposes it over axum together with the
//! notification hub.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use todo_events::{
//!     CompletionNotifier, EventDispatcher, InMemoryTodoRepository, NotificationHub,
//!     TodoCompleted, TodoService,
//! };
//!
//! let hub = NotificationHub::default();
//! let events = EventDispatcher::builder()
//!     .subscribe::<TodoCompleted, _>(CompletionNotifier::new(hub.clone()))
//!     .build();
//! let service = Arc::new(TodoService::new(InMemoryTodoRepository::new(), events));
//!
//! let todo = service.create(Some("MakeComplete"))?;
//! service.complete(todo.id())?; // observers of `hub` receive "MakeComplete is complete"
//! ```

mod error;
#[cfg(feature = "http")]
pub mod http;
mod todo_service;

pub use error::ServiceError;
pub use todo_service::TodoService;
