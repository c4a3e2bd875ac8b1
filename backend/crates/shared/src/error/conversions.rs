//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion into [`AppError`] for the parse failures
//! raised while reading settings and search parameters.

use super::app_error::AppError;
use crate::validation::DomainError;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("Invalid integer format").with_source(err)
    }
}

impl From<std::str::ParseBoolError> for AppError {
    fn from(err: std::str::ParseBoolError) -> Self {
        AppError::bad_request("Invalid boolean format").with_source(err)
    }
}

// ============================================================================
// Validation conversions
// ============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let errors = err.errors().to_vec();
        AppError::unprocessable(err.message().to_string()).with_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;
    use crate::validation::Error;

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_err: Result<u32, _> = "abc".parse();
        let app_err: AppError = parse_err.unwrap_err().into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_parse_bool_error_conversion() {
        let parse_err: Result<bool, _> = "yes".parse();
        let app_err: AppError = parse_err.unwrap_err().into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_domain_error_conversion_keeps_errors() {
        let domain = DomainError::with(Error::new("'name' should not be empty"));
        let app_err: AppError = domain.into();
        assert_eq!(app_err.kind(), ErrorKind::UnprocessableEntity);
        assert_eq!(app_err.message(), "'name' should not be empty");
        assert_eq!(app_err.errors().len(), 1);
    }
}
