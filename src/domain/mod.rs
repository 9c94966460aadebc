//! Domain types and request-driven clause selection.

pub mod filter;
pub mod todo;
pub mod update;
pub mod validation;

pub use filter::{FilterClause, TodoFilter};
pub use todo::{Category, DueDate, NewTodo, Priority, Status, TodoItem, UnknownVariant};
pub use update::{TodoUpdate, UpdateClause};
pub use validation::{FieldSet, ValidationError, validate_first_present};
