use tokio::sync::broadcast;
use tracing::debug;

use super::broadcaster::{BroadcastError, Broadcaster};

pub const DEFAULT_CAPACITY: usize = 64;

/// Fan-out point for real-time notifications.
///
/// Every subscriber receives every message sent after it subscribed. Messages
/// sent while nobody is subscribed are dropped; a subscriber that falls more
/// than `capacity` messages behind skips the oldest ones.
#[derive(Clone, Debug)]
pub struct NotificationHub {
    sender: broadcast::Sender<String>,
}

impl NotificationHub {
    /// `capacity` must be greater than zero.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        NotificationHub { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }

    pub fn observer_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Broadcaster for NotificationHub {
    fn broadcast(&self, message: &str) -> Result<(), BroadcastError> {
        match self.sender.send(message.to_string()) {
            Ok(observers) => debug!(observers, "notification sent"),
            Err(_) => debug!("no observers connected, notification dropped"),
        }
        Ok(())
    }
}
