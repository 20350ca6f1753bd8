use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use todos_api::v1::Todo;
use tracing::{debug, info};

use crate::{error::ApiError, validation::ValidTodo, AppState};

/// `Location` sent back on create. The id placeholder is not filled in.
pub const CREATED_LOCATION: &str = "/todos/{id}";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", get(get_todos).post(add_todo))
        .route("/todos/:id", get(get_todo).delete(delete_todo))
}

async fn get_todos(State(state): State<Arc<AppState>>) -> Json<Vec<Todo>> {
    Json(state.store.list().await)
}

async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Todo>, ApiError> {
    match state.store.get(id).await {
        Some(todo) => Ok(Json(todo)),
        None => {
            debug!(id, "todo not found");
            Err(ApiError::NotFound)
        }
    }
}

async fn add_todo(
    State(state): State<Arc<AppState>>,
    ValidTodo(todo): ValidTodo,
) -> impl IntoResponse {
    let todo = state.store.add(todo).await;

    info!(
        id = todo.id,
        name = %todo.name,
        "created todo"
    );

    (
        StatusCode::CREATED,
        [(header::LOCATION, CREATED_LOCATION)],
        Json(todo),
    )
}

async fn delete_todo(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> StatusCode {
    let removed = state.store.delete(id).await;

    info!(id, removed, "deleted todo");

    StatusCode::NO_CONTENT
}
