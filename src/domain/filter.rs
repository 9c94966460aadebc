//! Read-path clause selection.
//!
//! Exactly one [`FilterClause`] is chosen per list request. Rules are tried
//! in precedence order and the first one whose fields are all present wins;
//! when none applies the request falls back to a description search.

// =============================================================================
// TodoFilter
// =============================================================================

/// Filter fields taken from the list query string.
///
/// Values are kept as raw strings: only the first present field is
/// validated, so a compound filter may carry an unchecked second value. Such
/// a value is bound as a parameter and simply matches no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub priority: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    /// Description search term; empty matches every row.
    pub search: String,
}

// =============================================================================
// FilterClause
// =============================================================================

/// The single condition applied to a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    PriorityAndStatus { priority: String, status: String },
    CategoryAndStatus { category: String, status: String },
    PriorityAndCategory { priority: String, category: String },
    Status(String),
    Priority(String),
    Category(String),
    /// Substring match over the description.
    Search(String),
}

struct FilterRule {
    name: &'static str,
    build: fn(&TodoFilter) -> Option<FilterClause>,
}

const FILTER_RULES: [FilterRule; 6] = [
    FilterRule {
        name: "priority_and_status",
        build: |filter| {
            Some(FilterClause::PriorityAndStatus {
                priority: filter.priority.clone()?,
                status: filter.status.clone()?,
            })
        },
    },
    FilterRule {
        name: "category_and_status",
        build: |filter| {
            Some(FilterClause::CategoryAndStatus {
                category: filter.category.clone()?,
                status: filter.status.clone()?,
            })
        },
    },
    FilterRule {
        name: "priority_and_category",
        build: |filter| {
            Some(FilterClause::PriorityAndCategory {
                priority: filter.priority.clone()?,
                category: filter.category.clone()?,
            })
        },
    },
    FilterRule {
        name: "status",
        build: |filter| filter.status.clone().map(FilterClause::Status),
    },
    FilterRule {
        name: "priority",
        build: |filter| filter.priority.clone().map(FilterClause::Priority),
    },
    FilterRule {
        name: "category",
        build: |filter| filter.category.clone().map(FilterClause::Category),
    },
];

impl FilterClause {
    /// Selects the clause for `filter`.
    #[must_use]
    pub fn select(filter: &TodoFilter) -> Self {
        FILTER_RULES
            .iter()
            .find_map(|rule| {
                let clause = (rule.build)(filter)?;
                tracing::debug!(rule = rule.name, "Selected filter clause");
                Some(clause)
            })
            .unwrap_or_else(|| Self::Search(filter.search.clone()))
    }

    /// Column/value pairs compared for equality, joined with `AND`.
    ///
    /// Empty for [`FilterClause::Search`].
    #[must_use]
    pub fn equalities(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::PriorityAndStatus { priority, status } => {
                vec![("priority", priority.as_str()), ("status", status.as_str())]
            }
            Self::CategoryAndStatus { category, status } => {
                vec![("category", category.as_str()), ("status", status.as_str())]
            }
            Self::PriorityAndCategory { priority, category } => {
                vec![("priority", priority.as_str()), ("category", category.as_str())]
            }
            Self::Status(status) => vec![("status", status.as_str())],
            Self::Priority(priority) => vec![("priority", priority.as_str())],
            Self::Category(category) => vec![("category", category.as_str())],
            Self::Search(_) => Vec::new(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
