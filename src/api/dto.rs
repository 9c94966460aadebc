//! Request and response DTOs.
//!
//! Request body fields are read leniently: any JSON value is accepted and
//! turned into text, so a wrongly typed value fails the field validator with
//! its fixed message instead of being rejected by the deserializer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::ApiError;
use crate::domain::validation::{
    parse_category, parse_due_date, parse_priority, parse_required, parse_status,
};
use crate::domain::{
    Category, FieldSet, NewTodo, Priority, Status, TodoFilter, TodoItem, TodoUpdate,
};

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameters for `GET /todos/`.
///
/// ```text
/// GET /todos/?status=TO%20DO&priority=HIGH&search_q=Buy
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListTodosQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    /// Validated like the agenda date but not used for filtering.
    pub date: Option<String>,
    pub search_q: Option<String>,
}

impl ListTodosQuery {
    #[must_use]
    pub fn fields(&self) -> FieldSet<'_> {
        FieldSet {
            status: self.status.as_deref(),
            priority: self.priority.as_deref(),
            category: self.category.as_deref(),
            date: self.date.as_deref(),
        }
    }

    #[must_use]
    pub fn into_filter(self) -> TodoFilter {
        TodoFilter {
            priority: self.priority,
            status: self.status,
            category: self.category,
            search: self.search_q.unwrap_or_default(),
        }
    }
}

/// Query parameters for `GET /agenda/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AgendaQuery {
    pub date: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

impl AgendaQuery {
    #[must_use]
    pub fn fields(&self) -> FieldSet<'_> {
        FieldSet {
            status: self.status.as_deref(),
            priority: self.priority.as_deref(),
            category: self.category.as_deref(),
            date: self.date.as_deref(),
        }
    }
}

// =============================================================================
// Request Bodies
// =============================================================================

/// Request body for `POST /todos/`.
///
/// ```json
/// {
///   "id": 6,
///   "todo": "Finalize event theme",
///   "priority": "LOW",
///   "status": "TO DO",
///   "category": "HOME",
///   "dueDate": "2021-02-22"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub todo: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub due_date: Option<String>,
}

impl CreateTodoRequest {
    /// Validates every field in status → priority → category → dueDate order,
    /// then checks that `id` and `todo` are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for the first missing or invalid
    /// enumerated field or due date, and [`ApiError::MalformedBody`] when
    /// `id` is not an integer or `todo` is absent.
    pub fn into_new_todo(self) -> Result<NewTodo, ApiError> {
        let status = parse_required(self.status.as_deref(), parse_status)?;
        let priority = parse_required(self.priority.as_deref(), parse_priority)?;
        let category = parse_required(self.category.as_deref(), parse_category)?;
        let due_date = parse_required(self.due_date.as_deref(), parse_due_date)?;

        let id = self
            .id
            .as_ref()
            .and_then(integer_id)
            .ok_or(ApiError::MalformedBody("id"))?;
        let text = self.todo.ok_or(ApiError::MalformedBody("todo"))?;

        Ok(NewTodo {
            id,
            text,
            priority,
            status,
            category,
            due_date,
        })
    }
}

fn integer_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Request body for `PUT /todos/{id}/`. Only one field is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub todo: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub due_date: Option<String>,
}

impl UpdateTodoRequest {
    #[must_use]
    pub fn fields(&self) -> FieldSet<'_> {
        FieldSet {
            status: self.status.as_deref(),
            priority: self.priority.as_deref(),
            category: self.category.as_deref(),
            date: self.due_date.as_deref(),
        }
    }

    #[must_use]
    pub fn into_update(self) -> TodoUpdate {
        TodoUpdate {
            status: self.status,
            priority: self.priority,
            text: self.todo,
            category: self.category,
            due_date: self.due_date,
        }
    }
}

/// Reads a present body field of any JSON type as text.
///
/// Strings pass through, `null` becomes the empty string and any other value
/// keeps its JSON rendering (`1`, `true`, `[]`). An absent field never reaches
/// this function and stays `None` through `#[serde(default)]`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    };

    Ok(Some(text))
}

// =============================================================================
// Responses
// =============================================================================

/// A todo item as returned by the read endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: i64,
    pub todo: String,
    pub priority: Priority,
    pub status: Status,
    pub category: Category,
    pub due_date: String,
}

impl From<TodoItem> for TodoResponse {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            todo: item.text,
            priority: item.priority,
            status: item.status,
            category: item.category,
            due_date: item.due_date,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
