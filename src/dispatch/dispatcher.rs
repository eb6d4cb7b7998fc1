use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::error::{DispatchError, HandlerError, HandlerFailure};
use super::event::DomainEvent;

/// A unit of logic invoked for every published event of type `E`.
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    /// Name used in logs and failure reports.
    fn name(&self) -> &str {
        type_name::<Self>()
    }

    fn handle(&self, event: &E) -> Result<(), HandlerError>;
}

type ErasedHandler = Box<dyn Fn(&dyn Any) -> Result<(), HandlerError> + Send + Sync>;

struct Registration {
    name: String,
    handler: ErasedHandler,
}

/// Collects handler registrations during startup.
///
/// Call [`build`](DispatcherBuilder::build) once every handler is registered;
/// the resulting [`EventDispatcher`] cannot be changed afterwards.
#[derive(Default)]
pub struct DispatcherBuilder {
    routes: HashMap<TypeId, Vec<Registration>>,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure for events of type `E`.
    pub fn on<E, F>(self, name: impl Into<String>, handler: F) -> Self
    where
        E: DomainEvent,
        F: Fn(&E) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.register::<E, F>(name.into(), handler)
    }

    /// Register an [`EventHandler`] implementation for events of type `E`.
    pub fn subscribe<E, H>(self, handler: H) -> Self
    where
        E: DomainEvent,
        H: EventHandler<E> + 'static,
    {
        let name = handler.name().to_string();
        self.register::<E, _>(name, move |event: &E| handler.handle(event))
    }

    fn register<E, F>(mut self, name: String, handler: F) -> Self
    where
        E: DomainEvent,
        F: Fn(&E) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        let erased: ErasedHandler = Box::new(move |event: &dyn Any| match event.downcast_ref::<E>() {
            Some(event) => handler(event),
            None => Err(HandlerError::new(format!(
                "event is not a {}",
                type_name::<E>()
            ))),
        });

        self.routes
            .entry(TypeId::of::<E>())
            .or_default()
            .push(Registration {
                name,
                handler: erased,
            });
        self
    }

    /// Freeze the registrations.
    pub fn build(self) -> EventDispatcher {
        EventDispatcher {
            routes: Arc::new(self.routes),
        }
    }
}

/// Routes published events to the handlers registered for their type.
///
/// Clones share the same frozen routing table, so a dispatcher can be handed
/// to every request without locking.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    routes: Arc<HashMap<TypeId, Vec<Registration>>>,
}

impl EventDispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// A dispatcher with no handlers. Publishing to it is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Invoke every handler registered for `E`, in registration order, on the
    /// calling thread. Returns how many handlers ran.
    ///
    /// A failing handler does not stop the others; all failures are returned
    /// together once every handler has run.
    pub fn publish<E: DomainEvent>(&self, event: &E) -> Result<usize, DispatchError> {
        let Some(registrations) = self.routes.get(&TypeId::of::<E>()) else {
            debug!(event = event.event_name(), "no handlers registered");
            return Ok(0);
        };

        let mut failures = Vec::new();
        for registration in registrations {
            if let Err(error) = (registration.handler)(event as &dyn Any) {
                warn!(
                    event = event.event_name(),
                    handler = %registration.name,
                    %error,
                    "event handler failed"
                );
                failures.push(HandlerFailure {
                    handler: registration.name.clone(),
                    error,
                });
            }
        }

        if failures.is_empty() {
            debug!(
                event = event.event_name(),
                handlers = registrations.len(),
                "event published"
            );
            Ok(registrations.len())
        } else {
            Err(DispatchError::HandlerFailed {
                event: event.event_name(),
                failures,
            })
        }
    }

    /// Number of handlers registered for `E`.
    pub fn handler_count<E: DomainEvent>(&self) -> usize {
        self.routes
            .get(&TypeId::of::<E>())
            .map_or(0, |registrations| registrations.len())
    }
}
