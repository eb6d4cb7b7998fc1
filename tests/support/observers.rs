use std::sync::Mutex;

use todo_events::{BroadcastError, Broadcaster};

/// Keeps every broadcast message in order.
#[derive(Default)]
pub struct RecordingBroadcaster {
    messages: Mutex<Vec<String>>,
}

impl RecordingBroadcaster {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Broadcaster for RecordingBroadcaster {
    fn broadcast(&self, message: &str) -> Result<(), BroadcastError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Always fails, like a push channel whose transport is down.
pub struct OfflineBroadcaster;

impl Broadcaster for OfflineBroadcaster {
    fn broadcast(&self, _message: &str) -> Result<(), BroadcastError> {
        Err(BroadcastError("transport offline".to_string()))
    }
}
