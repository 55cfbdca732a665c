//! Assertion behaviour keywords and the polarity/mode they imply.
//!
//! Step phrases such as `page title should become "Home"` carry one of four
//! keywords. The adapter layer parses the keyword once into an
//! [`AssertionBehavior`]; the polling engine only ever sees the enum.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How an assertion samples its probe and which outcome it accepts.
///
/// # Examples
///
/// ```
/// use rstest_bdd_assert::{AssertionBehavior, Mode, Polarity};
///
/// let behavior: AssertionBehavior = "become not".parse().unwrap();
/// assert_eq!(behavior, AssertionBehavior::BecomeNot);
/// assert_eq!(behavior.mode(), Mode::Eventual);
/// assert_eq!(behavior.polarity(), Polarity::Negate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionBehavior {
    /// The value must already equal the expectation.
    Be,
    /// The value must already differ from the expectation.
    BeNot,
    /// The value must equal the expectation before the deadline.
    Become,
    /// The value must differ from the expectation before the deadline.
    BecomeNot,
}

/// Whether a behaviour affirms or negates the equality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// The observed value must equal the expected value.
    Affirm,
    /// The observed value must differ from the expected value.
    Negate,
}

/// Whether a behaviour samples once or polls until a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// A single sample decides the outcome.
    Instant,
    /// Samples repeat on a fixed interval until success or timeout.
    Eventual,
}

impl AssertionBehavior {
    /// Return the phrase keyword for this behaviour.
    ///
    /// # Examples
    ///
    /// ```
    /// use rstest_bdd_assert::AssertionBehavior;
    ///
    /// assert_eq!(AssertionBehavior::BeNot.as_str(), "be not");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Be => "be",
            Self::BeNot => "be not",
            Self::Become => "become",
            Self::BecomeNot => "become not",
        }
    }

    /// Polarity implied by the behaviour.
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Be | Self::Become => Polarity::Affirm,
            Self::BeNot | Self::BecomeNot => Polarity::Negate,
        }
    }

    /// Sampling mode implied by the behaviour.
    #[must_use]
    pub const fn mode(self) -> Mode {
        match self {
            Self::Be | Self::BeNot => Mode::Instant,
            Self::Become | Self::BecomeNot => Mode::Eventual,
        }
    }
}

impl Polarity {
    /// Returns `true` when `observed` satisfies this polarity against
    /// `expected`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rstest_bdd_assert::Polarity;
    ///
    /// assert!(Polarity::Affirm.holds(&None::<String>, &None));
    /// assert!(Polarity::Negate.holds(&"a", &"b"));
    /// ```
    #[must_use]
    pub fn holds<T: PartialEq + ?Sized>(self, observed: &T, expected: &T) -> bool {
        match self {
            Self::Affirm => observed == expected,
            Self::Negate => observed != expected,
        }
    }
}

impl fmt::Display for AssertionBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a behaviour keyword is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid assertion behavior '{0}', expected one of: be, be not, become, become not")]
pub struct BehaviorParseError(pub String);

impl FromStr for AssertionBehavior {
    type Err = BehaviorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        match normalised.as_str() {
            "be" => Ok(Self::Be),
            "be not" => Ok(Self::BeNot),
            "become" => Ok(Self::Become),
            "become not" => Ok(Self::BecomeNot),
            _ => Err(BehaviorParseError(value.trim().to_string())),
        }
    }
}

impl TryFrom<&str> for AssertionBehavior {
    type Error = BehaviorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
