//! Validation error values and step outcomes.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error as ThisError;

/// One validation failure with a human-readable message.
///
/// Serializes as `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Error {
    message: Cow<'static, str>,
}

impl Error {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Expected, user-correctable validation failure.
///
/// This is the only failure a [`ValidationHandler`](super::ValidationHandler)
/// absorbs. It carries the ordered errors that caused it; a failure built
/// from a single error has exactly that one.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct DomainError {
    message: String,
    errors: Vec<Error>,
}

impl DomainError {
    /// Failure made of a single error; the message is the error's message.
    pub fn with(error: Error) -> Self {
        Self {
            message: error.message().to_string(),
            errors: vec![error],
        }
    }

    /// Failure summarizing several errors under one message.
    ///
    /// An empty list still yields one error carrying `message`, so a
    /// handler absorbing it always turns dirty.
    pub fn with_errors(message: impl Into<String>, errors: Vec<Error>) -> Self {
        let message = message.into();
        let errors = if errors.is_empty() {
            vec![Error::new(message.clone())]
        } else {
            errors
        };
        Self { message, errors }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&Error> {
        self.errors.first()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

/// Outcome of a failed validation step.
///
/// `Invalid` is accumulated by the handler running the step; `Fault` is
/// handed back to the caller untouched.
#[derive(Debug)]
pub enum StepError<F> {
    /// Expected validation failure
    Invalid(DomainError),
    /// Programming or infrastructure failure
    Fault(F),
}

impl<F> StepError<F> {
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Invalid(DomainError::with(Error::new(message)))
    }

    pub fn fault(fault: F) -> Self {
        Self::Fault(fault)
    }
}

impl<F> From<DomainError> for StepError<F> {
    fn from(err: DomainError) -> Self {
        Self::Invalid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_as_message_object() {
        let err = Error::new("'name' should not be empty");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"message":"'name' should not be empty"}"#);
    }

    #[test]
    fn test_domain_error_with_single_error() {
        let err = DomainError::with(Error::new("'rating' should not be null"));
        assert_eq!(err.message(), "'rating' should not be null");
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.to_string(), "'rating' should not be null");
    }

    #[test]
    fn test_domain_error_with_no_errors_falls_back_to_message() {
        let err = DomainError::with_errors("Failed to create Genre", Vec::new());
        assert_eq!(err.errors(), &[Error::new("Failed to create Genre")]);
    }

    #[test]
    fn test_step_error_from_domain_error() {
        let step: StepError<()> = DomainError::with(Error::new("x")).into();
        assert!(matches!(step, StepError::Invalid(e) if e.message() == "x"));
    }
}
