//! Shared field rules
//!
//! Each rule appends at most one error so that aggregates report one
//! message per violated rule, in the order the rules are declared.

use kernel::validation::{Error, ValidationHandler};

/// Required text with a trimmed length between `min` and `max` characters.
pub fn required_text<H: ValidationHandler>(
    handler: &mut H,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        handler.append(Error::new(format!("'{field}' should not be empty")));
        return;
    }

    let length = trimmed.chars().count();
    if length < min || length > max {
        handler.append(Error::new(format!(
            "'{field}' must be between {min} and {max} characters"
        )));
    }
}

/// Optional text (may be empty) of at most `max` characters.
pub fn max_text<H: ValidationHandler>(handler: &mut H, field: &str, value: &str, max: usize) {
    if value.trim().chars().count() > max {
        handler.append(Error::new(format!(
            "'{field}' must be between 0 and {max} characters"
        )));
    }
}

/// Field that must be present.
pub fn required<H: ValidationHandler, T>(handler: &mut H, field: &str, value: Option<&T>) {
    if value.is_none() {
        handler.append(Error::new(format!("'{field}' should not be null")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::validation::Notification;

    fn messages(n: &Notification) -> Vec<&str> {
        n.errors().iter().map(Error::message).collect()
    }

    #[test]
    fn test_required_text_blank() {
        let mut n = Notification::create();
        required_text(&mut n, "name", "   ", 3, 255);
        assert_eq!(messages(&n), vec!["'name' should not be empty"]);
    }

    #[test]
    fn test_required_text_bounds() {
        let mut n = Notification::create();
        required_text(&mut n, "name", " ab ", 3, 255);
        required_text(&mut n, "name", &"a".repeat(256), 3, 255);
        required_text(&mut n, "name", "abc", 3, 255);
        required_text(&mut n, "name", &"a".repeat(255), 3, 255);
        assert_eq!(
            messages(&n),
            vec![
                "'name' must be between 3 and 255 characters",
                "'name' must be between 3 and 255 characters",
            ]
        );
    }

    #[test]
    fn test_required_text_counts_chars_not_bytes() {
        let mut n = Notification::create();
        required_text(&mut n, "name", "ação", 3, 4);
        assert!(!n.has_error());
    }

    #[test]
    fn test_max_text() {
        let mut n = Notification::create();
        max_text(&mut n, "description", "", 4000);
        max_text(&mut n, "description", &"d".repeat(4001), 4000);
        assert_eq!(
            messages(&n),
            vec!["'description' must be between 0 and 4000 characters"]
        );
    }

    #[test]
    fn test_required() {
        let mut n = Notification::create();
        required::<_, u16>(&mut n, "launchedAt", None);
        required(&mut n, "rating", Some(&"L"));
        assert_eq!(messages(&n), vec!["'launchedAt' should not be null"]);
    }
}
