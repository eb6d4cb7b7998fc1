use std::any::Any;
use std::fmt::Debug;

/// A fact raised by an aggregate operation.
///
/// Handlers are routed by the concrete Rust type of the event; `event_name`
/// is only used for logging and error reports.
pub trait DomainEvent: Any + Debug + Send + Sync {
    fn event_name(&self) -> &'static str;
}
