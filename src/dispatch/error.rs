use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Error returned by an event handler.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        HandlerError {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        HandlerError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One handler that failed during a publish.
#[derive(Debug)]
pub struct HandlerFailure {
    /// Registration name of the handler.
    pub handler: String,
    pub error: HandlerError,
}

impl fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.handler, self.error)
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    /// At least one handler failed. Every other handler still ran.
    #[error("{} handler(s) failed for {event}: {}", .failures.len(), join(.failures))]
    HandlerFailed {
        event: &'static str,
        failures: Vec<HandlerFailure>,
    },
}

impl DispatchError {
    pub fn failures(&self) -> &[HandlerFailure] {
        match self {
            DispatchError::HandlerFailed { failures, .. } => failures,
        }
    }
}

fn join(failures: &[HandlerFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
