#![allow(dead_code)]

pub mod observers;

use std::sync::Arc;

use todo_events::{
    CompletionNotifier, EventDispatcher, InMemoryTodoRepository, NotificationHub, TodoCompleted,
    TodoService,
};

use observers::RecordingBroadcaster;

pub type Service = TodoService<InMemoryTodoRepository>;

/// A service whose completions are recorded by `observer`.
pub fn recorded_service(observer: Arc<RecordingBroadcaster>) -> Service {
    let events = EventDispatcher::builder()
        .subscribe::<TodoCompleted, _>(CompletionNotifier::new(observer))
        .build();
    TodoService::new(InMemoryTodoRepository::new(), events)
}

/// A service wired to a notification hub, as the server binary does it.
pub fn hub_service(hub: &NotificationHub) -> Arc<Service> {
    let events = EventDispatcher::builder()
        .subscribe::<TodoCompleted, _>(CompletionNotifier::new(hub.clone()))
        .build();
    Arc::new(TodoService::new(InMemoryTodoRepository::new(), events))
}
