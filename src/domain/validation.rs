//! Request field validation.
//!
//! Two validators exist:
//!
//! - [`validate_first_present`] walks status → priority → category → date and
//!   decides on the first field that is present. A valid first field ends the
//!   walk; later fields are left unchecked.
//! - [`parse_required`] and friends back the creation path, where every field
//!   is mandatory and checked in the same order.

use thiserror::Error;

use super::todo::{Category, DueDate, Priority, Status};

// =============================================================================
// ValidationError
// =============================================================================

/// A rejected request field. `Display` yields the fixed client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid Todo Status")]
    InvalidStatus,

    #[error("Invalid Todo Priority")]
    InvalidPriority,

    #[error("Invalid Todo Category")]
    InvalidCategory,

    #[error("Invalid Due Date")]
    InvalidDueDate,
}

impl ValidationError {
    /// Name of the request field the error refers to.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::InvalidStatus => "status",
            Self::InvalidPriority => "priority",
            Self::InvalidCategory => "category",
            Self::InvalidDueDate => "dueDate",
        }
    }
}

// =============================================================================
// Field Parsers
// =============================================================================

pub fn parse_status(value: &str) -> Result<Status, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidStatus)
}

pub fn parse_priority(value: &str) -> Result<Priority, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidPriority)
}

pub fn parse_category(value: &str) -> Result<Category, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidCategory)
}

pub fn parse_due_date(value: &str) -> Result<DueDate, ValidationError> {
    DueDate::parse(value).ok_or(ValidationError::InvalidDueDate)
}

/// Parses a mandatory field; a missing value fails exactly like an invalid one.
///
/// # Errors
///
/// Returns the error produced by `parser` for the value, or for the empty
/// string when the value is absent.
pub fn parse_required<T>(
    value: Option<&str>,
    parser: fn(&str) -> Result<T, ValidationError>,
) -> Result<T, ValidationError> {
    parser(value.unwrap_or_default())
}

// =============================================================================
// First-Present Validation
// =============================================================================

/// The validated subset of a query string or update body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSet<'a> {
    pub status: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub category: Option<&'a str>,
    pub date: Option<&'a str>,
}

type FieldCheck = fn(&str) -> Result<(), ValidationError>;

/// Validates the first present field in status → priority → category → date
/// order and ignores the rest.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first present field when its value
/// is not acceptable.
pub fn validate_first_present(fields: &FieldSet<'_>) -> Result<(), ValidationError> {
    let chain: [(Option<&str>, FieldCheck); 4] = [
        (fields.status, |value| parse_status(value).map(drop)),
        (fields.priority, |value| parse_priority(value).map(drop)),
        (fields.category, |value| parse_category(value).map(drop)),
        (fields.date, |value| parse_due_date(value).map(drop)),
    ];

    chain
        .into_iter()
        .find_map(|(value, check)| value.map(check))
        .unwrap_or(Ok(()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    mod messages {
        use super::*;

        #[rstest]
        #[case(ValidationError::InvalidStatus, "Invalid Todo Status", "status")]
        #[case(ValidationError::InvalidPriority, "Invalid Todo Priority", "priority")]
        #[case(ValidationError::InvalidCategory, "Invalid Todo Category", "category")]
        #[case(ValidationError::InvalidDueDate, "Invalid Due Date", "dueDate")]
        fn fixed_message_per_field(
            #[case] error: ValidationError,
            #[case] message: &str,
            #[case] field: &str,
        ) {
            assert_eq!(error.to_string(), message);
            assert_eq!(error.field(), field);
        }
    }

    mod first_present {
        use super::*;

        #[rstest]
        fn empty_set_passes() {
            assert_eq!(validate_first_present(&FieldSet::default()), Ok(()));
        }

        #[rstest]
        #[case(FieldSet { status: Some("DONE"), ..FieldSet::default() })]
        #[case(FieldSet { priority: Some("LOW"), ..FieldSet::default() })]
        #[case(FieldSet { category: Some("HOME"), ..FieldSet::default() })]
        #[case(FieldSet { date: Some("2021-12-12"), ..FieldSet::default() })]
        fn single_valid_field_passes(#[case] fields: FieldSet<'static>) {
            assert_eq!(validate_first_present(&fields), Ok(()));
        }

        #[rstest]
        #[case(FieldSet { status: Some("LATER"), ..FieldSet::default() }, ValidationError::InvalidStatus)]
        #[case(FieldSet { priority: Some("URGENT"), ..FieldSet::default() }, ValidationError::InvalidPriority)]
        #[case(FieldSet { category: Some("GARDEN"), ..FieldSet::default() }, ValidationError::InvalidCategory)]
        #[case(FieldSet { date: Some("2021-22-12"), ..FieldSet::default() }, ValidationError::InvalidDueDate)]
        fn single_invalid_field_fails(
            #[case] fields: FieldSet<'static>,
            #[case] expected: ValidationError,
        ) {
            assert_eq!(validate_first_present(&fields), Err(expected));
        }

        #[rstest]
        fn valid_status_stops_the_chain() {
            let fields = FieldSet {
                status: Some("DONE"),
                priority: Some("URGENT"),
                category: Some("GARDEN"),
                date: Some("never"),
            };

            assert_eq!(validate_first_present(&fields), Ok(()));
        }

        #[rstest]
        fn status_is_checked_before_priority() {
            let fields = FieldSet {
                status: Some("LATER"),
                priority: Some("URGENT"),
                ..FieldSet::default()
            };

            assert_eq!(
                validate_first_present(&fields),
                Err(ValidationError::InvalidStatus)
            );
        }

        #[rstest]
        fn category_is_checked_before_date() {
            let fields = FieldSet {
                category: Some("GARDEN"),
                date: Some("never"),
                ..FieldSet::default()
            };

            assert_eq!(
                validate_first_present(&fields),
                Err(ValidationError::InvalidCategory)
            );
        }
    }

    mod required {
        use super::*;

        #[rstest]
        fn missing_value_fails_like_invalid_value() {
            assert_eq!(
                parse_required(None, parse_status),
                Err(ValidationError::InvalidStatus)
            );
            assert_eq!(
                parse_required(None, parse_due_date),
                Err(ValidationError::InvalidDueDate)
            );
        }

        #[rstest]
        fn present_value_is_parsed() {
            assert_eq!(
                parse_required(Some("WORK"), parse_category),
                Ok(Category::Work)
            );
        }
    }

    proptest! {
        #[test]
        fn status_outside_enum_is_rejected(value in "\\PC*") {
            prop_assume!(Status::ALL.iter().all(|status| status.as_str() != value));
            prop_assert_eq!(parse_status(&value), Err(ValidationError::InvalidStatus));
        }

        #[test]
        fn priority_outside_enum_is_rejected(value in "\\PC*") {
            prop_assume!(Priority::ALL.iter().all(|priority| priority.as_str() != value));
            prop_assert_eq!(parse_priority(&value), Err(ValidationError::InvalidPriority));
        }

        #[test]
        fn category_outside_enum_is_rejected(value in "\\PC*") {
            prop_assume!(Category::ALL.iter().all(|category| category.as_str() != value));
            prop_assert_eq!(parse_category(&value), Err(ValidationError::InvalidCategory));
        }

        #[test]
        fn enum_members_pass_through_unchanged(index in 0usize..3) {
            prop_assert_eq!(parse_status(Status::ALL[index].as_str()), Ok(Status::ALL[index]));
            prop_assert_eq!(parse_priority(Priority::ALL[index].as_str()), Ok(Priority::ALL[index]));
            prop_assert_eq!(parse_category(Category::ALL[index].as_str()), Ok(Category::ALL[index]));
        }
    }
}
