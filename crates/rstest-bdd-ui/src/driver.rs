//! Collaborator traits implemented by a browser automation backend.
//!
//! Probes take `&self` and must not change what they observe, because the
//! polling assertions call them repeatedly.

use thiserror::Error;

/// Failure reported by the browser backend.
///
/// During eventual checks these are treated as transient and retried until
/// the deadline passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("browser driver error: {message}")]
pub struct DriverError {
    message: String,
}

impl DriverError {
    /// Wrap a backend error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Message supplied by the backend.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Page-level operations used by the navigation steps.
pub trait BrowserDriver {
    /// Load `url` in the current window.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the backend rejects the navigation.
    fn navigate(&self, url: &str) -> Result<(), DriverError>;

    /// Absolute URL of the current page.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the page cannot be queried.
    fn current_url(&self) -> Result<String, DriverError>;

    /// Title of the current page, `None` when the page has no title.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the page cannot be queried.
    fn title(&self) -> Result<Option<String>, DriverError>;

    /// Resize the browser window.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the backend rejects the size.
    fn resize_window(&self, height: u32, width: u32) -> Result<(), DriverError>;
}

/// A list-like element whose item texts can be read.
pub trait ListProbe {
    /// Human-readable name used in failure messages.
    fn caption(&self) -> &str;

    /// Current item texts in display order.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the element is stale or missing.
    fn list_values(&self) -> Result<Vec<String>, DriverError>;
}

