use std::sync::Arc;

use crate::infrastructure::SqliteTodoRepository;

/// Shared handler state; owns the storage handle for the life of the server.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<SqliteTodoRepository>,
}

impl AppState {
    #[must_use]
    pub fn new(repository: SqliteTodoRepository) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}
