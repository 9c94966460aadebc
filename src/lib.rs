//! # todo-agenda
//!
//! A small HTTP service managing todo items stored in SQLite.
//!
//! Items carry an enumerated priority, status and category plus a due date,
//! and can be listed by filter or free-text search, fetched by id, listed
//! by due date (the agenda), created, partially updated and deleted.
//!
//! ## Layers
//!
//! - [`domain`]: item types, validation and precedence rules
//! - [`infrastructure`]: configuration and the SQLite repository
//! - [`api`]: axum handlers, DTOs and error mapping
//! - [`server`]: listener and graceful shutdown

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod server;
