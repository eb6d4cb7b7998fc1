//! Real-time notification of completed todos.

mod broadcaster;
mod handler;
mod hub;

pub use broadcaster::{BroadcastError, Broadcaster};
pub use handler::{completion_message, CompletionNotifier};
pub use hub::{NotificationHub, DEFAULT_CAPACITY};
