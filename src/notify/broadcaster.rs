use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("broadcast failed: {0}")]
pub struct BroadcastError(pub String);

/// Pushes a message to every connected observer.
pub trait Broadcaster: Send + Sync {
    fn broadcast(&self, message: &str) -> Result<(), BroadcastError>;
}

impl<B: Broadcaster + ?Sized> Broadcaster for Arc<B> {
    fn broadcast(&self, message: &str) -> Result<(), BroadcastError> {
        (**self).broadcast(message)
    }
}
