//! HTTP transport for the todo service. Requires the `http` feature.
//!
//! ## Routes
//!
//! - `GET /api/v1/todo` — all todos, in insertion order.
//! - `GET /api/v1/todo/count` — number of todos.
//! - `GET /api/v1/todo/:id` — one todo.
//! - `POST /api/v1/todo` — create, body `{ "description": ... }`.
//! - `PUT /api/v1/todo/:id` — change the description (`isComplete` is ignored).
//! - `DELETE /api/v1/todo/:id` — remove; unknown and nil ids succeed.
//! - `POST /api/v1/todo/:id/MakeComplete` — complete and notify observers.
//! - `GET /hub` — server-sent events; each completion arrives as a `Notify` event.
//! - `GET /health` — `{ "ok": true }`.
//!
//! Errors are returned as `{ "error": "<message>" }` with the status from
//! [`ServiceError::status_code`].

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::notify::NotificationHub;
use crate::repository::TodoRepository;
use crate::todo::{Todo, TodoId};

use super::error::ServiceError;
use super::todo_service::TodoService;

/// Name of the server-sent event carrying completion messages.
pub const NOTIFY_EVENT: &str = "Notify";

/// Todo as exchanged over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoView {
    pub id: TodoId,
    pub description: String,
    pub is_complete: bool,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        let memento = todo.snapshot();
        TodoView {
            id: memento.id,
            description: memento.description,
            is_complete: memento.is_complete,
        }
    }
}

/// Body of create and update requests. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoRequest {
    pub id: Option<TodoId>,
    pub description: Option<String>,
    pub is_complete: Option<bool>,
}

struct AppState<R> {
    service: Arc<TodoService<R>>,
    hub: NotificationHub,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        AppState {
            service: Arc::clone(&self.service),
            hub: self.hub.clone(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build the axum `Router` for the service and its notification hub.
pub fn router<R>(service: Arc<TodoService<R>>, hub: NotificationHub) -> Router
where
    R: TodoRepository + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/hub", get(hub_handler::<R>))
        .route(
            "/api/v1/todo",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            "/api/v1/todo/",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/v1/todo/count", get(count_handler::<R>))
        .route(
            "/api/v1/todo/:id",
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .route("/api/v1/todo/:id/MakeComplete", post(complete_handler::<R>))
        .with_state(AppState { service, hub })
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:8888"`).
pub async fn serve<R>(
    service: Arc<TodoService<R>>,
    hub: NotificationHub,
    addr: &str,
) -> Result<(), std::io::Error>
where
    R: TodoRepository + 'static,
{
    let app = router(service, hub);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

async fn list_handler<R: TodoRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<TodoView>>, ServiceError> {
    let todos = state.service.list()?;
    Ok(Json(todos.iter().map(TodoView::from).collect()))
}

async fn count_handler<R: TodoRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<usize>, ServiceError> {
    Ok(Json(state.service.count()?))
}

async fn get_handler<R: TodoRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<TodoId>,
) -> Result<Json<TodoView>, ServiceError> {
    let todo = state.service.get(id)?;
    Ok(Json(TodoView::from(&todo)))
}

async fn create_handler<R: TodoRepository>(
    State(state): State<AppState<R>>,
    Json(request): Json<TodoRequest>,
) -> Result<(StatusCode, Json<TodoView>), ServiceError> {
    let todo = state.service.create(request.description.as_deref())?;
    Ok((StatusCode::CREATED, Json(TodoView::from(&todo))))
}

async fn update_handler<R: TodoRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<TodoId>,
    Json(request): Json<TodoRequest>,
) -> Result<Json<TodoView>, ServiceError> {
    let todo = state.service.update(id, request.description.as_deref())?;
    Ok(Json(TodoView::from(&todo)))
}

async fn delete_handler<R: TodoRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ServiceError> {
    state.service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn complete_handler<R: TodoRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<TodoId>,
) -> Result<Json<TodoView>, ServiceError> {
    let todo = state.service.complete(id)?;
    Ok(Json(TodoView::from(&todo)))
}

async fn hub_handler<R: TodoRepository>(
    State(state): State<AppState<R>>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let stream = BroadcastStream::new(state.hub.subscribe()).filter_map(notify_event);
    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Turn a hub message into a `Notify` event. A lagging observer loses the
/// messages it missed and keeps receiving from the oldest one still buffered.
fn notify_event(
    message: Result<String, BroadcastStreamRecvError>,
) -> Option<Result<SseEvent, Infallible>> {
    match message {
        Ok(text) => Some(Ok(SseEvent::default().event(NOTIFY_EVENT).data(text))),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            warn!(skipped, "observer lagged");
            None
        }
    }
}
