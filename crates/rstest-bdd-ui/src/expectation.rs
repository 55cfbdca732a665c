//! Phrase keywords for containment steps.

use std::fmt;
use std::str::FromStr;

use rstest_bdd_assert::{contains_all, contains_in_order};
use thiserror::Error;

/// Error returned when a containment keyword is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid containment keyword '{0}'")]
pub struct ExpectationParseError(pub String);

fn normalise(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// What a list step expects of the reference items.
///
/// # Examples
///
/// ```
/// use rstest_bdd_ui::ListExpectation;
///
/// let expectation: ListExpectation = "contain in exact order".parse().unwrap();
/// assert!(expectation.check(&["a", "b", "c"], &["a", "c"]));
/// assert!(expectation.expected_outcome());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListExpectation {
    /// Every reference item is present, in any order.
    Contain,
    /// The reference items appear in the same relative order.
    ContainInExactOrder,
    /// Not every reference item is present.
    NotContain,
}

impl ListExpectation {
    /// Return the phrase keyword for this expectation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::ContainInExactOrder => "contain in exact order",
            Self::NotContain => "not contain",
        }
    }

    /// Run the containment check this expectation is phrased over.
    ///
    /// The result is not negated for [`ListExpectation::NotContain`]; compare
    /// it with [`ListExpectation::expected_outcome`].
    #[must_use]
    pub fn check<O, R>(self, observed: &[O], reference: &[R]) -> bool
    where
        O: AsRef<str>,
        R: AsRef<str>,
    {
        match self {
            Self::Contain | Self::NotContain => contains_all(observed, reference),
            Self::ContainInExactOrder => contains_in_order(observed, reference),
        }
    }

    /// Outcome of [`ListExpectation::check`] that satisfies the step.
    #[must_use]
    pub const fn expected_outcome(self) -> bool {
        !matches!(self, Self::NotContain)
    }
}

impl fmt::Display for ListExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListExpectation {
    type Err = ExpectationParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalise(value).as_str() {
            "contain" | "contains" => Ok(Self::Contain),
            "contain in exact order" | "contains in exact order" => Ok(Self::ContainInExactOrder),
            "not contain" | "not contains" => Ok(Self::NotContain),
            _ => Err(ExpectationParseError(value.trim().to_string())),
        }
    }
}

/// Whether a substring check expects presence or absence.
///
/// Parses the keyword variants used by URL steps: `contains`,
/// `not contains`, `should` and `should not`.
///
/// # Examples
///
/// ```
/// use rstest_bdd_ui::Presence;
///
/// assert_eq!("should not".parse(), Ok(Presence::Absent));
/// assert!(Presence::Present.expected_outcome());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// The fragment must be present.
    Present,
    /// The fragment must be absent.
    Absent,
}

impl Presence {
    /// Outcome of the substring test that satisfies the step.
    #[must_use]
    pub const fn expected_outcome(self) -> bool {
        matches!(self, Self::Present)
    }
}

impl FromStr for Presence {
    type Err = ExpectationParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalise(value).as_str() {
            "contains" | "contain" | "should" | "should contain" => Ok(Self::Present),
            "not contains" | "not contain" | "should not" | "should not contain" => {
                Ok(Self::Absent)
            }
            _ => Err(ExpectationParseError(value.trim().to_string())),
        }
    }
}
