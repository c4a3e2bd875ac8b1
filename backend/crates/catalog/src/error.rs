//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::{DomainError, Error, Notification, StepError, ValidationHandler};
use thiserror::Error as ThisError;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Outcome of a validation step run inside a use case
pub type Step<T> = Result<T, StepError<CatalogError>>;

/// Catalog-specific error variants
#[derive(Debug, ThisError)]
pub enum CatalogError {
    /// One or more validation rules failed; every error is kept
    #[error("{message}")]
    Validation {
        message: String,
        notification: Notification,
    },

    /// Aggregate lookup found nothing
    #[error("{aggregate} with ID {id} was not found")]
    NotFound { aggregate: &'static str, id: String },

    /// Search parameters rejected
    #[error("Invalid search query: {0}")]
    InvalidQuery(DomainError),

    /// Storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Batch validation failure built from a dirty notification
    pub fn validation(message: impl Into<String>, notification: Notification) -> Self {
        CatalogError::Validation {
            message: message.into(),
            notification,
        }
    }

    pub fn not_found(aggregate: &'static str, id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            aggregate,
            id: id.into(),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation { .. } => ErrorKind::UnprocessableEntity,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::InvalidQuery(_) => ErrorKind::BadRequest,
            CatalogError::Storage(_) => ErrorKind::ServiceUnavailable,
            CatalogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Validation errors carried by this failure (empty for other kinds)
    pub fn errors(&self) -> &[Error] {
        match self {
            CatalogError::Validation { notification, .. } => notification.errors(),
            CatalogError::InvalidQuery(err) => err.errors(),
            _ => &[],
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let app = AppError::new(self.kind(), self.to_string()).with_errors(self.errors().to_vec());
        match self {
            CatalogError::InvalidQuery(_) => {
                app.with_action("Check page, perPage, sort and direction")
            }
            CatalogError::Storage(_) => app.with_action("Retry later"),
            _ => app,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            CatalogError::Storage(msg) => {
                tracing::error!(message = %msg, "Catalog storage error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::Validation { message, notification } => {
                tracing::warn!(
                    message = %message,
                    errors = notification.errors().len(),
                    "Catalog validation failed"
                );
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        err.log();
        err.to_app_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let cases: Vec<(CatalogError, ErrorKind)> = vec![
            (
                CatalogError::validation("x", Notification::with(Error::new("y"))),
                ErrorKind::UnprocessableEntity,
            ),
            (CatalogError::not_found("Category", "1"), ErrorKind::NotFound),
            (
                CatalogError::InvalidQuery(DomainError::with(Error::new("bad"))),
                ErrorKind::BadRequest,
            ),
            (
                CatalogError::Storage("down".into()),
                ErrorKind::ServiceUnavailable,
            ),
            (
                CatalogError::Internal("bug".into()),
                ErrorKind::InternalServerError,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.kind(), expected, "{error}");
        }
    }

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::not_found("Genre", "123");
        assert_eq!(err.to_string(), "Genre with ID 123 was not found");
        assert!(err.errors().is_empty());
    }

    #[test]
    fn test_validation_to_app_error_lists_every_error() {
        let mut notification = Notification::create();
        notification
            .append(Error::new("'name' should not be empty"))
            .append(Error::new("'type' should not be null"));
        let err = CatalogError::validation("Could not create Aggregate CastMember", notification);

        let app: AppError = err.into();
        assert_eq!(app.status_code(), 422);
        assert_eq!(app.message(), "Could not create Aggregate CastMember");
        assert_eq!(app.errors().len(), 2);
        assert!(app.action().is_none());
    }

    #[test]
    fn test_storage_error_suggests_retry() {
        let app = CatalogError::Storage("timeout".into()).to_app_error();
        assert_eq!(app.status_code(), 503);
        assert_eq!(app.action(), Some("Retry later"));
        assert!(app.errors().is_empty());
    }
}
