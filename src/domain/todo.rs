//! Todo item and its enumerated fields.
//!
//! The wire and storage representation of every enum is the exact
//! upper-case string (`"TO DO"`, `"IN PROGRESS"`, ...), matched
//! case-sensitively.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// Returned when a string is not a member of one of the fixed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {field}")]
pub struct UnknownVariant {
    /// Name of the enumerated field.
    pub field: &'static str,
    /// The rejected value.
    pub value: String,
}

impl UnknownVariant {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

// =============================================================================
// Priority
// =============================================================================

/// The priority level of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Priority {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl FromStr for Priority {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value)
            .ok_or_else(|| UnknownVariant::new("priority", value))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// =============================================================================
// Status
// =============================================================================

/// The progress status of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    #[serde(rename = "TO DO")]
    ToDo,
    #[serde(rename = "IN PROGRESS")]
    InProgress,
    #[serde(rename = "DONE")]
    Done,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "TO DO",
            Self::InProgress => "IN PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl FromStr for Status {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownVariant::new("status", value))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// =============================================================================
// Category
// =============================================================================

/// The area of life a todo item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "WORK")]
    Work,
    #[serde(rename = "HOME")]
    Home,
    #[serde(rename = "LEARNING")]
    Learning,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Work, Self::Home, Self::Learning];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Home => "HOME",
            Self::Learning => "LEARNING",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| UnknownVariant::new("category", value))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

// =============================================================================
// DueDate
// =============================================================================

/// Calendar-date formats accepted on input, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A calendar date without a time component.
///
/// Parsing is lenient about the input shape; formatting always yields
/// `yyyy-MM-dd`, which is the form persisted and matched by the agenda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses a date, returning `None` when the input is not a real calendar
    /// date in any accepted format.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_agenda::domain::DueDate;
    ///
    /// assert_eq!(DueDate::parse("2021-2-2").unwrap().to_string(), "2021-02-02");
    /// assert!(DueDate::parse("2021-02-30").is_none());
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|timestamp| timestamp.date_naive())
            })
            .or_else(|| {
                NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
                    .ok()
                    .map(|timestamp| timestamp.date())
            })
            .or_else(|| parse_partial(value))
            .map(Self)
    }
}

/// `yyyy-MM` or `yyyy`, resolved to the first day of the month or year.
fn parse_partial(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.split_once('-').unwrap_or((value, "1"));

    let all_digits = |text: &str| !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || !all_digits(year) || month.len() > 2 || !all_digits(month) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

impl std::fmt::Display for DueDate {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0.format("%Y-%m-%d"))
    }
}

// =============================================================================
// TodoItem
// =============================================================================

/// A stored todo item.
///
/// `due_date` is kept as the stored text: rows written by this service hold a
/// normalized `yyyy-MM-dd`, but the agenda lookup matches by substring and
/// must report whatever the table holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub text: String,
    pub priority: Priority,
    pub status: Status,
    pub category: Category,
    pub due_date: String,
}

/// A fully validated item ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub id: i64,
    pub text: String,
    pub priority: Priority,
    pub status: Status,
    pub category: Category,
    pub due_date: DueDate,
}

// =============================================================================
// Tests
// =============================================================================
