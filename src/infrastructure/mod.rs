//! Infrastructure layer: configuration and storage adapters.

pub mod config;
pub mod repository;
pub mod sqlite;

pub use config::{AppConfig, ConfigurationError};
pub use repository::RepositoryError;
pub use sqlite::SqliteTodoRepository;
