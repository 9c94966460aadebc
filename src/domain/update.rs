//! Update-path clause selection.
//!
//! A partial update writes a single column. The first present field in
//! status → priority → todo → category → dueDate order is applied and every
//! other field in the body is ignored.

use super::todo::{Category, DueDate, Priority, Status};
use super::validation::{
    ValidationError, parse_category, parse_due_date, parse_priority, parse_status,
};

/// Fields of an update body, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoUpdate {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub text: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
}

/// The single-column assignment produced for an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateClause {
    Status(Status),
    Priority(Priority),
    Text(String),
    Category(Category),
    DueDate(DueDate),
}

type UpdateRule = fn(&TodoUpdate) -> Option<Result<UpdateClause, ValidationError>>;

const UPDATE_RULES: [UpdateRule; 5] = [
    |update| {
        let value = update.status.as_deref()?;
        Some(parse_status(value).map(UpdateClause::Status))
    },
    |update| {
        let value = update.priority.as_deref()?;
        Some(parse_priority(value).map(UpdateClause::Priority))
    },
    |update| update.text.clone().map(|text| Ok(UpdateClause::Text(text))),
    |update| {
        let value = update.category.as_deref()?;
        Some(parse_category(value).map(UpdateClause::Category))
    },
    |update| {
        let value = update.due_date.as_deref()?;
        Some(parse_due_date(value).map(UpdateClause::DueDate))
    },
];

impl UpdateClause {
    /// Selects the clause for `update`, or `None` when no recognized field is
    /// present.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the selected field does not parse.
    /// Request validation runs first and rejects such bodies, so this only
    /// fires for callers that skip it.
    pub fn select(update: &TodoUpdate) -> Result<Option<Self>, ValidationError> {
        UPDATE_RULES
            .iter()
            .find_map(|rule| rule(update))
            .transpose()
    }

    /// Column written by this clause.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::Priority(_) => "priority",
            Self::Text(_) => "todo",
            Self::Category(_) => "category",
            Self::DueDate(_) => "due_date",
        }
    }

    /// Value written by this clause, in its stored form.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Status(status) => status.as_str().to_string(),
            Self::Priority(priority) => priority.as_str().to_string(),
            Self::Text(text) => text.clone(),
            Self::Category(category) => category.as_str().to_string(),
            Self::DueDate(due_date) => due_date.to_string(),
        }
    }

    /// Confirmation message returned to the client.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Status(_) => "Status Updated",
            Self::Priority(_) => "Priority Updated",
            Self::Text(_) => "Todo Updated",
            Self::Category(_) => "Category Updated",
            Self::DueDate(_) => "Due Date Updated",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
