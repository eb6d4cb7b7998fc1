use std::error::Error;
use std::sync::Arc;

use todo_events::service::http;
use todo_events::{
    telemetry, CompletionNotifier, Config, EventDispatcher, InMemoryTodoRepository,
    NotificationHub, TodoCompleted, TodoService,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = Config::from_env()?;
    telemetry::init_tracing(&config.log_filter)?;

    let hub = NotificationHub::new(config.notify_capacity);

    // Registrations are frozen here, before any request is served.
    let events = EventDispatcher::builder()
        .subscribe::<TodoCompleted, _>(CompletionNotifier::new(hub.clone()))
        .build();

    let service = Arc::new(TodoService::new(InMemoryTodoRepository::new(), events));

    info!(bind_addr = %config.bind_addr, "starting todo server");
    http::serve(service, hub, &config.bind_addr).await?;
    Ok(())
}
