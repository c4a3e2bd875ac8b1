//! Validation handler capability.

use super::error::{Error, StepError};

/// Collector of validation outcomes, independent of the accumulation strategy.
///
/// Aggregates validate themselves against any handler:
///
/// ```rust
/// use kernel::validation::{Error, Notification, ValidationHandler};
///
/// fn validate_name(name: &str, handler: &mut impl ValidationHandler) {
///     if name.trim().is_empty() {
///         handler.append(Error::new("'name' should not be empty"));
///     }
/// }
///
/// let mut notification = Notification::create();
/// validate_name("  ", &mut notification);
/// assert!(notification.has_error());
/// ```
pub trait ValidationHandler {
    /// Record one error. Never fails.
    fn append(&mut self, error: Error) -> &mut Self;

    /// Record every error of `other` after this handler's own.
    ///
    /// `other` is left untouched; merging an empty handler is a no-op.
    fn merge<H: ValidationHandler>(&mut self, other: &H) -> &mut Self;

    /// Run one validation step.
    ///
    /// * `Ok(value)` - returns `Ok(Some(value))`, handler unchanged
    /// * `Err(StepError::Invalid(e))` - errors of `e` are recorded, returns `Ok(None)`
    /// * `Err(StepError::Fault(f))` - nothing is recorded, returns `Err(f)`
    ///
    /// The value is only meaningful when the step did not record an error.
    fn validate<T, F, S>(&mut self, step: S) -> Result<Option<T>, F>
    where
        S: FnOnce() -> Result<T, StepError<F>>;

    /// All recorded errors in insertion order.
    fn errors(&self) -> &[Error];

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&Error> {
        self.errors().first()
    }
}
