//! FailFast - keeps only the first validation error

use super::error::{DomainError, Error, StepError};
use super::handler::ValidationHandler;

/// Handler that stops at the first validation error.
///
/// Once dirty, further appends and merges are ignored and further steps
/// are not executed. Faults from steps that do run still propagate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailFast {
    first: Option<Error>,
}

impl FailFast {
    pub fn create() -> Self {
        Self::default()
    }

    /// `Ok(())` when clean, otherwise the first error as a [`DomainError`].
    pub fn into_result(self) -> Result<(), DomainError> {
        match self.first {
            None => Ok(()),
            Some(error) => Err(DomainError::with(error)),
        }
    }
}

impl ValidationHandler for FailFast {
    fn append(&mut self, error: Error) -> &mut Self {
        if self.first.is_none() {
            self.first = Some(error);
        }
        self
    }

    fn merge<H: ValidationHandler>(&mut self, other: &H) -> &mut Self {
        if let Some(error) = other.first_error() {
            self.append(error.clone());
        }
        self
    }

    fn validate<T, F, S>(&mut self, step: S) -> Result<Option<T>, F>
    where
        S: FnOnce() -> Result<T, StepError<F>>,
    {
        if self.first.is_some() {
            return Ok(None);
        }
        match step() {
            Ok(value) => Ok(Some(value)),
            Err(StepError::Invalid(err)) => {
                if let Some(error) = err.into_errors().into_iter().next() {
                    self.first = Some(error);
                }
                Ok(None)
            }
            Err(StepError::Fault(fault)) => Err(fault),
        }
    }

    fn errors(&self) -> &[Error] {
        self.first.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Notification;
    use std::convert::Infallible;

    #[test]
    fn test_keeps_only_first_error() {
        let mut handler = FailFast::create();
        handler.append(Error::new("first")).append(Error::new("second"));

        assert!(handler.has_error());
        assert_eq!(handler.errors(), &[Error::new("first")]);
    }

    #[test]
    fn test_skips_steps_once_dirty() {
        let mut handler = FailFast::create();
        handler.append(Error::new("first"));

        let mut ran = false;
        let value: Result<Option<u32>, Infallible> = handler.validate(|| {
            ran = true;
            Ok(1)
        });

        assert_eq!(value.unwrap(), None);
        assert!(!ran);
    }

    #[test]
    fn test_runs_steps_while_clean() {
        let mut handler = FailFast::create();
        let value: Result<Option<u32>, Infallible> = handler.validate(|| Ok(7));
        assert_eq!(value.unwrap(), Some(7));
        assert!(!handler.has_error());
    }

    #[test]
    fn test_invalid_step_records_first_error() {
        let mut handler = FailFast::create();
        let failure = DomainError::with_errors("many", vec![Error::new("a"), Error::new("b")]);
        let value: Result<Option<u32>, Infallible> = handler.validate(|| Err(failure.into()));

        assert_eq!(value.unwrap(), None);
        assert_eq!(handler.errors(), &[Error::new("a")]);
    }

    #[test]
    fn test_fault_propagates() {
        let mut handler = FailFast::create();
        let value: Result<Option<u32>, &str> = handler.validate(|| Err(StepError::fault("boom")));
        assert_eq!(value, Err("boom"));
        assert!(!handler.has_error());
    }

    #[test]
    fn test_merge_takes_first_of_other() {
        let mut other = Notification::create();
        other.append(Error::new("x")).append(Error::new("y"));

        let mut handler = FailFast::create();
        handler.merge(&other);
        assert_eq!(handler.errors(), &[Error::new("x")]);
    }

    #[test]
    fn test_into_result() {
        assert!(FailFast::create().into_result().is_ok());

        let mut handler = FailFast::create();
        handler.append(Error::new("'perPage' must be between 1 and 50"));
        let err = handler.into_result().unwrap_err();
        assert_eq!(err.message(), "'perPage' must be between 1 and 50");
    }
}
