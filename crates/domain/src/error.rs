//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`BankError`]
//! via `#[from]` (or a manual `From` impl for boxed storage errors).

/// Top-level error returned by every service operation.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A requested record (or set of records) does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    /// Point lookup by id found nothing.
    #[error("{entity} with id = {id} not found")]
    Record { entity: &'static str, id: String },

    /// The record an update targets does not exist.
    #[error("cannot update {entity}: id = {id} does not exist")]
    UpdateTarget { entity: &'static str, id: String },

    /// A bulk lookup found a different number of records than requested.
    #[error(
        "{entity}: found {found} of {requested} requested records (missing ids: [{}])",
        .missing.join(", ")
    )]
    Bulk {
        entity: &'static str,
        requested: usize,
        found: usize,
        missing: Vec<String>,
    },
}

/// A payload or request parameter is structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{entity}.{field} is required")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
}

/// Unwrap a required transfer-object field or report which one is missing.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when `value` is `None`.
pub fn required<T>(
    value: Option<T>,
    entity: &'static str,
    field: &'static str,
) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { entity, field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_entity_and_id_in_record_message() {
        let err = NotFoundError::Record {
            entity: "AccountDetails",
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "AccountDetails with id = 7 not found");
    }

    #[test]
    fn should_list_missing_ids_in_bulk_message() {
        let err = NotFoundError::Bulk {
            entity: "Atm",
            requested: 3,
            found: 1,
            missing: vec!["2".to_string(), "3".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Atm: found 1 of 3 requested records (missing ids: [2, 3])"
        );
    }

    #[test]
    fn should_keep_not_found_message_when_converted() {
        let err: BankError = NotFoundError::UpdateTarget {
            entity: "Atm",
            id: "1".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "cannot update Atm: id = 1 does not exist");
    }

    #[test]
    fn should_return_value_when_required_field_present() {
        assert_eq!(required(Some(5), "Atm", "address"), Ok(5));
    }

    #[test]
    fn should_report_field_when_required_field_missing() {
        let result: Result<i64, _> = required(None, "Atm", "address");
        assert_eq!(
            result,
            Err(ValidationError::MissingField {
                entity: "Atm",
                field: "address",
            })
        );
    }
}
