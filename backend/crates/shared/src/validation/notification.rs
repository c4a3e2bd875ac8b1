//! Notification - accumulate-all validation handler

use serde::Serialize;

use super::error::{DomainError, Error, StepError};
use super::handler::ValidationHandler;

/// Accumulates every validation error of one pass.
///
/// Starts clean (no errors) and turns dirty on the first recorded error.
/// There is no way back to clean: create a new instance for a new pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    errors: Vec<Error>,
}

impl Notification {
    /// Empty (clean) notification
    pub fn create() -> Self {
        Self::default()
    }

    /// Notification already holding one error
    pub fn with(error: Error) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// `Ok(())` when clean, otherwise a [`DomainError`] carrying every error.
    pub fn into_result(self, message: impl Into<String>) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::with_errors(message, self.errors))
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: Error) -> &mut Self {
        self.errors.push(error);
        self
    }

    fn merge<H: ValidationHandler>(&mut self, other: &H) -> &mut Self {
        self.errors.extend_from_slice(other.errors());
        self
    }

    fn validate<T, F, S>(&mut self, step: S) -> Result<Option<T>, F>
    where
        S: FnOnce() -> Result<T, StepError<F>>,
    {
        match step() {
            Ok(value) => Ok(Some(value)),
            Err(StepError::Invalid(err)) => {
                self.errors.extend(err.into_errors());
                Ok(None)
            }
            Err(StepError::Fault(fault)) => Err(fault),
        }
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}

impl From<Notification> for Vec<Error> {
    fn from(notification: Notification) -> Self {
        notification.errors
    }
}
