//! In-process domain event dispatch.
//!
//! Handlers are registered once on a [`DispatcherBuilder`] during startup.
//! [`DispatcherBuilder::build`] freezes them into an [`EventDispatcher`],
//! which is then passed to whatever needs to publish.
//!
//! ```ignore
//! use todo_events::dispatch::{EventDispatcher, HandlerError};
//! use todo_events::TodoCompleted;
//!
//! let events = EventDispatcher::builder()
//!     .on("log", |e: &TodoCompleted| {
//!         println!("{} done", e.description);
//!         Ok::<(), HandlerError>(())
//!     })
//!     .build();
//!
//! events.publish(&TodoCompleted { description: "Write docs".into() })?;
//! ```

mod dispatcher;
mod error;
mod event;

pub use dispatcher::{DispatcherBuilder, EventDispatcher, EventHandler};
pub use error::{DispatchError, HandlerError, HandlerFailure};
pub use event::DomainEvent;
