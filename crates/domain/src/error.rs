//! Common error types used across the workspace.
//!
//! Each layer converts into [`TimeDashError`] via `#[from]`; adapters map it
//! onto their own transport (HTTP status codes, UI messages, …).

/// Top-level error for timedash operations.
#[derive(Debug, thiserror::Error)]
pub enum TimeDashError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// A published summary broke a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("`{field}` must not be negative")]
    NegativeHours { field: &'static str },

    #[error("`{field}` must be a finite number")]
    NonFiniteHours { field: &'static str },
}

/// The summary store could not be read or written.
#[derive(Debug, thiserror::Error)]
#[error("summary store unavailable: {reason}")]
pub struct StorageError {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_field_in_validation_message() {
        let err = ValidationError::NegativeHours {
            field: "weekly_hours",
        };
        assert_eq!(err.to_string(), "`weekly_hours` must not be negative");
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: TimeDashError = ValidationError::NonFiniteHours {
            field: "total_hours_today",
        }
        .into();
        assert!(matches!(
            err,
            TimeDashError::Validation(ValidationError::NonFiniteHours { .. })
        ));
    }

    #[test]
    fn should_keep_field_in_top_level_message() {
        let err: TimeDashError = ValidationError::NegativeHours {
            field: "total_hours_today",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "validation error: `total_hours_today` must not be negative"
        );
    }

    #[test]
    fn should_convert_storage_error_into_top_level_error() {
        let err: TimeDashError = StorageError {
            reason: "lock poisoned".to_string(),
        }
        .into();
        assert!(matches!(err, TimeDashError::Storage(_)));
    }
}
