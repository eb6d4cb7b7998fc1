//! The todo aggregate, its memento and the events it raises.

mod aggregate;
mod events;
mod id;
mod memento;
mod validation;

pub use aggregate::Todo;
pub use events::TodoCompleted;
pub use id::TodoId;
pub use memento::TodoMemento;
pub use validation::{validate_description, ValidationError, MIN_DESCRIPTION_LEN};
