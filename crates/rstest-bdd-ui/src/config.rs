//! Application URL configuration for navigation steps.

use std::env;

use thiserror::Error;
use url::Url;

/// Environment variable holding the application base URL.
pub const BASE_URL_ENV: &str = "RSTEST_BDD_UI_BASE_URL";

/// Errors raised while loading [`UiConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UiConfigError {
    /// The base URL variable is unset.
    #[error("{variable} is not set")]
    MissingBaseUrl {
        /// Environment variable that was read.
        variable: &'static str,
    },
    /// The base URL is not an absolute URL.
    #[error("invalid base URL '{value}': {source}")]
    InvalidBaseUrl {
        /// Raw value that failed to parse.
        value: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
}

/// Settings shared by the navigation steps.
///
/// # Examples
///
/// ```
/// use rstest_bdd_ui::UiConfig;
///
/// let config = UiConfig::parse("https://app.example.test/portal/").unwrap();
/// assert_eq!(
///     config.resolve("inbox?page=2").unwrap().as_str(),
///     "https://app.example.test/portal/inbox?page=2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    base_url: Url,
}

impl UiConfig {
    /// Build a configuration from a parsed base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Parse `base_url` into a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UiConfigError::InvalidBaseUrl`] when the value is not an
    /// absolute URL.
    pub fn parse(base_url: &str) -> Result<Self, UiConfigError> {
        let trimmed = base_url.trim();
        Url::parse(trimmed)
            .map(Self::new)
            .map_err(|source| UiConfigError::InvalidBaseUrl {
                value: trimmed.to_string(),
                source,
            })
    }

    /// Load the base URL from [`BASE_URL_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`UiConfigError::MissingBaseUrl`] when the variable is unset
    /// and [`UiConfigError::InvalidBaseUrl`] when it does not parse.
    pub fn from_env() -> Result<Self, UiConfigError> {
        Self::from_lookup(|variable| env::var(variable).ok())
    }

    /// Load the base URL through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`UiConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UiConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BASE_URL_ENV).ok_or(UiConfigError::MissingBaseUrl {
            variable: BASE_URL_ENV,
        })?;
        Self::parse(&raw)
    }

    /// Application base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `relative` against the base URL using standard reference
    /// resolution.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] when `relative` cannot be joined.
    pub fn resolve(&self, relative: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(relative)
    }
}
