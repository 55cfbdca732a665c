//! Failure type returned by the step bindings.

use rstest_bdd_assert::AssertionError;
use thiserror::Error;

use crate::{DataTableError, DriverError, ListExpectation};

/// Reason a UI step did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StepFailure {
    /// A value check did not hold.
    #[error(transparent)]
    Assertion(#[from] AssertionError),
    /// A list did not satisfy its containment expectation.
    #[error("{caption} should {expectation} {reference:?}, but last held {observed:?}")]
    ListMismatch {
        /// Caption of the probed list.
        caption: String,
        /// Expectation stated by the step.
        expectation: ListExpectation,
        /// Reference items from the step table.
        reference: Vec<String>,
        /// Items read on the final sample, empty if the list was never read.
        observed: Vec<String>,
        /// Underlying assertion failure.
        #[source]
        source: AssertionError,
    },
    /// The browser backend rejected an action.
    #[error(transparent)]
    Driver(#[from] DriverError),
    /// The step table could not supply a reference list.
    #[error(transparent)]
    DataTable(#[from] DataTableError),
    /// A URL in the step could not be resolved.
    #[error("invalid URL '{url}': {source}")]
    Url {
        /// URL text as written in the step or returned by the driver.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
}
