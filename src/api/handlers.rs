//! HTTP handlers for the todo endpoints.
//!
//! Every handler validates its input before touching storage. Successful
//! writes answer `200` with a fixed plain-text message; a point lookup that
//! finds nothing answers `200` with an empty body.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::dto::{
    AgendaQuery, CreateTodoRequest, ListTodosQuery, TodoResponse, UpdateTodoRequest,
};
use super::error::ApiError;
use super::state::AppState;
use crate::domain::validation::{parse_due_date, parse_required};
use crate::domain::{FilterClause, UpdateClause, validate_first_present};

pub const TODO_ADDED: &str = "Todo Successfully Added";
pub const TODO_DELETED: &str = "Todo Deleted";

// =============================================================================
// Reads
// =============================================================================

/// `GET /todos/`: lists items matching the highest-precedence filter.
///
/// # Errors
///
/// `400` when the first present of status, priority, category or date is
/// invalid; `500` on storage failure.
pub async fn list_todos(
    State(state): State<AppState>,
    Query(query): Query<ListTodosQuery>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    validate_first_present(&query.fields())?;

    let clause = FilterClause::select(&query.into_filter());
    let items = state.repository.list(&clause).await?;

    Ok(Json(items.into_iter().map(TodoResponse::from).collect()))
}

/// `GET /todos/{id}/`
///
/// # Errors
///
/// `500` on storage failure.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let response = match state.repository.find_by_id(id).await? {
        Some(item) => Json(TodoResponse::from(item)).into_response(),
        None => StatusCode::OK.into_response(),
    };

    Ok(response)
}

/// `GET /agenda/`: lists items whose stored due date contains the
/// normalized `date` parameter.
///
/// # Errors
///
/// `400` when the first present field is invalid or `date` is missing;
/// `500` on storage failure.
pub async fn get_agenda(
    State(state): State<AppState>,
    Query(query): Query<AgendaQuery>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    validate_first_present(&query.fields())?;

    let date = parse_required(query.date.as_deref(), parse_due_date)?;
    tracing::debug!(%date, "Agenda lookup");

    let items = state.repository.list_due_on(&date).await?;

    Ok(Json(items.into_iter().map(TodoResponse::from).collect()))
}

// =============================================================================
// Writes
// =============================================================================

/// `POST /todos/`
///
/// # Errors
///
/// `400` for the first missing or invalid enumerated field or due date;
/// `500` on storage failure, including a duplicate id.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<&'static str, ApiError> {
    let todo = request.into_new_todo()?;

    state.repository.insert(&todo).await?;
    tracing::info!(id = todo.id, "Todo created");

    Ok(TODO_ADDED)
}

/// `PUT /todos/{id}/`: applies the single highest-precedence field present.
///
/// A body with none of the updatable fields is a no-op answered with an
/// empty `200`.
///
/// # Errors
///
/// `400` when the first present field is invalid; `500` on storage failure.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<&'static str, ApiError> {
    validate_first_present(&request.fields())?;

    let Some(clause) = UpdateClause::select(&request.into_update())? else {
        return Ok("");
    };

    state.repository.update(id, &clause).await?;
    tracing::info!(id, column = clause.column(), "Todo updated");

    Ok(clause.message())
}

/// `DELETE /todos/{id}/`: succeeds whether or not the id exists.
///
/// # Errors
///
/// `500` on storage failure.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    state.repository.delete(id).await?;
    tracing::info!(id, "Todo deleted");

    Ok(TODO_DELETED)
}
