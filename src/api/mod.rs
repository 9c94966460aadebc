//! HTTP layer: DTOs, handlers, error mapping and routing.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use dto::{AgendaQuery, CreateTodoRequest, ListTodosQuery, TodoResponse, UpdateTodoRequest};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
