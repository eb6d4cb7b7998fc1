use crate::dispatch::{DispatchError, EventDispatcher};

use super::events::TodoCompleted;
use super::memento::TodoMemento;
use super::validation::{validate_description, ValidationError};
use super::TodoId;

/// A single task and the rules for changing it.
///
/// The aggregate never stores a dispatcher. Only [`Todo::complete`] receives
/// one, so building a todo from a memento cannot raise events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    description: String,
    is_complete: bool,
}

impl Todo {
    /// Create a new, incomplete todo with a fresh id.
    pub fn create(description: &str) -> Result<Self, ValidationError> {
        let description = validate_description(Some(description))?;
        Ok(Todo {
            id: TodoId::new(),
            description: description.to_string(),
            is_complete: false,
        })
    }

    /// Rebuild a todo from persisted state.
    pub fn restore(memento: TodoMemento) -> Self {
        Todo {
            id: memento.id,
            description: memento.description,
            is_complete: memento.is_complete,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Replace the description. On error the todo is left unchanged.
    pub fn describe(&mut self, description: &str) -> Result<(), ValidationError> {
        let description = validate_description(Some(description))?;
        self.description = description.to_string();
        Ok(())
    }

    /// Mark the todo complete and publish [`TodoCompleted`].
    ///
    /// Completing an already complete todo publishes again. The state change
    /// stays applied when a handler fails; the failure is returned.
    pub fn complete(&mut self, events: &EventDispatcher) -> Result<(), DispatchError> {
        self.is_complete = true;
        events.publish(&TodoCompleted {
            description: self.description.clone(),
        })?;
        Ok(())
    }

    pub fn snapshot(&self) -> TodoMemento {
        TodoMemento {
            id: self.id,
            description: self.description.clone(),
            is_complete: self.is_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::HandlerError;
    use std::sync::{Arc, Mutex};

    fn recording_dispatcher() -> (EventDispatcher, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let dispatcher = EventDispatcher::builder()
            .on("record", move |e: &TodoCompleted| {
                sink.lock().unwrap().push(e.description.clone());
                Ok(())
            })
            .build();
        (dispatcher, seen)
    }

    #[test]
    fn create() {
        let todo = Todo::create("Bla bla bla").unwrap();
        assert!(todo.id().is_valid_reference());
        assert_eq!(todo.description(), "Bla bla bla");
        assert!(!todo.is_complete());
    }

    #[test]
    fn create_rejects_invalid_descriptions() {
        assert!(matches!(
            Todo::create("O"),
            Err(ValidationError::TooShort { length: 1, .. })
        ));
        assert_eq!(Todo::create("       "), Err(ValidationError::Blank));
        assert_eq!(Todo::create(""), Err(ValidationError::Blank));
    }

    #[test]
    fn describe() {
        let mut todo = Todo::create("Bla bla bla").unwrap();
        todo.describe("Foo Bar Baz").unwrap();
        assert_eq!(todo.description(), "Foo Bar Baz");
    }

    #[test]
    fn describe_failure_leaves_state_unchanged() {
        let mut todo = Todo::create("Bla bla bla").unwrap();
        let before = todo.clone();
        assert!(todo.describe(" ").is_err());
        assert!(todo.describe("x").is_err());
        assert_eq!(todo, before);
    }

    #[test]
    fn complete_publishes_current_description() {
        let (events, seen) = recording_dispatcher();
        let mut todo = Todo::create("First").unwrap();
        todo.describe("MakeComplete").unwrap();

        todo.complete(&events).unwrap();

        assert!(todo.is_complete());
        assert_eq!(*seen.lock().unwrap(), vec!["MakeComplete"]);
    }

    #[test]
    fn complete_twice_publishes_twice() {
        let (events, seen) = recording_dispatcher();
        let mut todo = Todo::create("Again").unwrap();

        todo.complete(&events).unwrap();
        todo.complete(&events).unwrap();

        assert!(todo.is_complete());
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn complete_keeps_state_when_handler_fails() {
        let events = EventDispatcher::builder()
            .on("broken", |_: &TodoCompleted| Err(HandlerError::new("offline")))
            .build();
        let mut todo = Todo::create("Fragile").unwrap();

        let err = todo.complete(&events).unwrap_err();

        assert_eq!(err.failures().len(), 1);
        assert!(todo.is_complete());
    }

    #[test]
    fn snapshot_restore_roundtrip() {
        let (events, _) = recording_dispatcher();
        let mut todo = Todo::create("Roundtrip").unwrap();
        todo.complete(&events).unwrap();

        let restored = Todo::restore(todo.snapshot());
        assert_eq!(restored, todo);
        assert_eq!(restored.snapshot(), todo.snapshot());
    }

    #[test]
    fn restore_is_silent() {
        let (_, seen) = recording_dispatcher();
        let memento = TodoMemento {
            id: TodoId::new(),
            description: "Already done".into(),
            is_complete: true,
        };

        let todo = Todo::restore(memento.clone());

        assert!(todo.is_complete());
        assert_eq!(todo.snapshot(), memento);
        assert!(seen.lock().unwrap().is_empty());
    }
}
