use crate::dispatch::DomainEvent;

/// Raised every time a todo is completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoCompleted {
    /// Description of the todo at the moment it was completed.
    pub description: String,
}

impl DomainEvent for TodoCompleted {
    fn event_name(&self) -> &'static str {
        "TodoCompleted"
    }
}
