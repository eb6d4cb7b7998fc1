use tracing::info;

use crate::dispatch::{EventHandler, HandlerError};
use crate::todo::TodoCompleted;

use super::broadcaster::Broadcaster;

/// Text pushed to observers when a todo is completed.
pub fn completion_message(description: &str) -> String {
    format!("{description} is complete")
}

/// Forwards every [`TodoCompleted`] to all observers of a [`Broadcaster`].
pub struct CompletionNotifier<B> {
    broadcaster: B,
}

impl<B: Broadcaster> CompletionNotifier<B> {
    pub fn new(broadcaster: B) -> Self {
        CompletionNotifier { broadcaster }
    }
}

impl<B: Broadcaster> EventHandler<TodoCompleted> for CompletionNotifier<B> {
    fn name(&self) -> &str {
        "completion-notifier"
    }

    fn handle(&self, event: &TodoCompleted) -> Result<(), HandlerError> {
        let message = completion_message(&event.description);
        self.broadcaster
            .broadcast(&message)
            .map_err(|e| HandlerError::with_source("completion notification not delivered", e))?;
        info!(%message, "completion broadcast");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::EventDispatcher;
    use crate::notify::BroadcastError;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl Broadcaster for Recorder {
        fn broadcast(&self, message: &str) -> Result<(), BroadcastError> {
            self.0.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    struct Unreachable;

    impl Broadcaster for Unreachable {
        fn broadcast(&self, _message: &str) -> Result<(), BroadcastError> {
            Err(BroadcastError("transport closed".into()))
        }
    }

    #[test]
    fn message_format() {
        assert_eq!(completion_message("MakeComplete"), "MakeComplete is complete");
    }

    #[test]
    fn forwards_message() {
        let recorder = Arc::new(Recorder::default());
        let notifier = CompletionNotifier::new(Arc::clone(&recorder));

        notifier
            .handle(&TodoCompleted {
                description: "Buy milk".into(),
            })
            .unwrap();

        assert_eq!(*recorder.0.lock().unwrap(), vec!["Buy milk is complete"]);
    }

    #[test]
    fn broadcast_failure_becomes_handler_error() {
        let notifier = CompletionNotifier::new(Unreachable);
        let err = notifier
            .handle(&TodoCompleted {
                description: "Buy milk".into(),
            })
            .unwrap_err();
        assert_eq!(err.message(), "completion notification not delivered");
    }

    #[test]
    fn registered_with_dispatcher() {
        let recorder = Arc::new(Recorder::default());
        let events = EventDispatcher::builder()
            .subscribe::<TodoCompleted, _>(CompletionNotifier::new(Arc::clone(&recorder)))
            .build();

        let invoked = events
            .publish(&TodoCompleted {
                description: "Walk dog".into(),
            })
            .unwrap();

        assert_eq!(invoked, 1);
        assert_eq!(*recorder.0.lock().unwrap(), vec!["Walk dog is complete"]);
    }
}
