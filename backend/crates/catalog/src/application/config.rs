//! Application Configuration
//!
//! Configuration for the catalog application layer.

use kernel::error::app_error::{AppError, AppResult};
use kernel::pagination::DEFAULT_PER_PAGE;

/// Environment variable overriding [`CatalogConfig::default_per_page`]
pub const ENV_DEFAULT_PER_PAGE: &str = "CATALOG_DEFAULT_PER_PAGE";
/// Environment variable overriding [`CatalogConfig::max_per_page`]
pub const ENV_MAX_PER_PAGE: &str = "CATALOG_MAX_PER_PAGE";

/// Catalog application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Page size used when a list request does not name one
    pub default_per_page: u32,
    /// Largest accepted page size
    pub max_per_page: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: 50,
        }
    }
}

impl CatalogConfig {
    /// Create config for development (large pages for browsing fixtures)
    pub fn development() -> Self {
        Self {
            max_per_page: 500,
            ..Default::default()
        }
    }

    /// Read overrides from the environment, falling back to defaults
    ///
    /// # Errors
    /// `BadRequest` when a variable is not a number, or when the default
    /// page size is zero or above the maximum.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, fallback: u32| -> AppResult<u32> {
            match lookup(key) {
                Some(raw) => Ok(raw.trim().parse::<u32>()?),
                None => Ok(fallback),
            }
        };

        let config = Self {
            default_per_page: read(ENV_DEFAULT_PER_PAGE, defaults.default_per_page)?,
            max_per_page: read(ENV_MAX_PER_PAGE, defaults.max_per_page)?,
        };

        if config.default_per_page == 0 || config.default_per_page > config.max_per_page {
            return Err(AppError::bad_request(format!(
                "{ENV_DEFAULT_PER_PAGE} must be between 1 and {}",
                config.max_per_page
            )));
        }

        tracing::debug!(
            default_per_page = config.default_per_page,
            max_per_page = config.max_per_page,
            "Catalog config loaded"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.default_per_page, 10);
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::from_lookup(lookup(&[
            (ENV_DEFAULT_PER_PAGE, "25"),
            (ENV_MAX_PER_PAGE, " 100 "),
        ]))
        .unwrap();
        assert_eq!(config.default_per_page, 25);
        assert_eq!(config.max_per_page, 100);
    }

    #[test]
    fn test_not_a_number() {
        let err = CatalogConfig::from_lookup(lookup(&[(ENV_MAX_PER_PAGE, "many")])).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_default_above_max() {
        let err = CatalogConfig::from_lookup(lookup(&[(ENV_DEFAULT_PER_PAGE, "80")])).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.message().contains(ENV_DEFAULT_PER_PAGE));
    }

    #[test]
    fn test_development() {
        let config = CatalogConfig::development();
        assert!(config.max_per_page > CatalogConfig::default().max_per_page);
        assert_eq!(config.default_per_page, DEFAULT_PER_PAGE);
    }
}
