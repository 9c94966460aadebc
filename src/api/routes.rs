//! Route configuration for the todo API.
//!
//! # Routes
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | /todos/ | `list_todos` | List items by filter or search |
//! | POST | /todos/ | `create_todo` | Create an item |
//! | GET | /todos/{id}/ | `get_todo` | Fetch one item |
//! | PUT | /todos/{id}/ | `update_todo` | Change one field of an item |
//! | DELETE | /todos/{id}/ | `delete_todo` | Delete an item |
//! | GET | /agenda/ | `get_agenda` | List items due on a date |

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_todo, delete_todo, get_agenda, get_todo, list_todos, update_todo,
};
use super::state::AppState;

/// Creates the router with all todo routes and request tracing.
///
/// # Example
///
/// ```rust,ignore
/// use todo_agenda::api::{AppState, create_router};
///
/// let router = create_router(AppState::new(repository));
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}/",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/agenda/", get(get_agenda))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
