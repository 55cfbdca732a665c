//! Error types surfaced by assertions and configuration loading.

use std::time::Duration;

use thiserror::Error;

use crate::AssertionBehavior;

/// Failure raised when an assertion's terminal condition is not met.
///
/// Both variants carry the caller-supplied context and the last value the
/// probe produced, formatted with `Debug` (or `<probe error: ..>` when the
/// probe itself failed).
///
/// # Examples
///
/// ```
/// use rstest_bdd_assert::{AssertionBehavior, AssertionError};
///
/// let err = AssertionError::Unmet {
///     context: "page title".into(),
///     behavior: AssertionBehavior::Be,
///     expected: "\"Home\"".into(),
///     observed: "\"Login\"".into(),
/// };
/// assert!(err.to_string().contains("\"Login\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AssertionError {
    /// An instant check sampled a value that failed the condition.
    #[error("{context}: expected to {behavior} {expected}, but observed {observed}")]
    Unmet {
        /// Human-readable description of what was checked.
        context: String,
        /// Behaviour requested by the step.
        behavior: AssertionBehavior,
        /// Debug rendering of the expected value.
        expected: String,
        /// Debug rendering of the observed value.
        observed: String,
    },
    /// An eventual check never satisfied its condition before the deadline.
    #[error(
        "{context}: expected to {behavior} {expected} within {waited:?}, but last observed {observed}"
    )]
    Timeout {
        /// Human-readable description of what was checked.
        context: String,
        /// Behaviour requested by the step.
        behavior: AssertionBehavior,
        /// Debug rendering of the expected value.
        expected: String,
        /// Debug rendering of the final observation before the deadline.
        observed: String,
        /// Time spent polling.
        waited: Duration,
    },
}

impl AssertionError {
    /// The last observation recorded by the failing check.
    #[must_use]
    pub fn observed(&self) -> &str {
        match self {
            Self::Unmet { observed, .. } | Self::Timeout { observed, .. } => observed,
        }
    }

    /// Returns `true` when the failure came from an exhausted deadline.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Errors raised when poll settings cannot be read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The variable did not hold a whole number of milliseconds.
    #[error("invalid value '{value}' for {variable}, expected a whole number of milliseconds")]
    InvalidDuration {
        /// Environment variable that was read.
        variable: &'static str,
        /// Raw value found in the environment.
        value: String,
    },
    /// A zero poll interval would spin without yielding.
    #[error("{variable} must be greater than zero")]
    ZeroInterval {
        /// Environment variable that was read.
        variable: &'static str,
    },
}
