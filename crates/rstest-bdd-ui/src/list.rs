//! Steps that compare a list element with a table of expected items.

use std::cell::RefCell;

use rstest_bdd_assert::{AssertionBehavior, Clock, Mode, Poller, SystemClock};

use crate::{ListExpectation, ListProbe, ReferenceTable, StepFailure, table_to_rows};

/// Containment checks for list elements.
///
/// Bound to the phrase
/// `(.*?) should (contain|contain in exact order|not contain) the following items:`
/// followed by a single-column table.
#[derive(Debug, Clone)]
pub struct ListSteps<C = SystemClock> {
    poller: Poller<C>,
}

impl Default for ListSteps<SystemClock> {
    fn default() -> Self {
        Self::with_poller(Poller::default())
    }
}

impl<C: Clock> ListSteps<C> {
    /// Use an explicit poller for eventual list checks.
    #[must_use]
    pub const fn with_poller(poller: Poller<C>) -> Self {
        Self { poller }
    }

    /// Check `list` against the `column` values of `table`.
    ///
    /// The list is re-read on every sample. The phrases above check with
    /// [`Mode::Instant`]; [`Mode::Eventual`] keeps sampling until the list
    /// settles or the poll deadline passes.
    ///
    /// # Errors
    ///
    /// Returns [`StepFailure::DataTable`] when the column cannot be read and
    /// [`StepFailure::ListMismatch`] when the list does not satisfy
    /// `expectation`.
    pub fn check_list_contains_items<L: ListProbe + ?Sized>(
        &self,
        list: &L,
        expectation: ListExpectation,
        mode: Mode,
        table: &ReferenceTable,
        column: &str,
    ) -> Result<(), StepFailure> {
        let reference = table_to_rows(table, column)?;
        let last_seen = RefCell::new(Vec::new());
        let behavior = match mode {
            Mode::Instant => AssertionBehavior::Be,
            Mode::Eventual => AssertionBehavior::Become,
        };
        let outcome = self.poller.try_should_become(
            || {
                let values = list.list_values()?;
                let matched = expectation.check(&values, &reference);
                *last_seen.borrow_mut() = values;
                Ok::<_, StepFailure>(matched)
            },
            expectation.expected_outcome(),
            behavior,
            format_args!("{} list", list.caption()),
        );
        outcome.map_err(|source| StepFailure::ListMismatch {
            caption: list.caption().to_string(),
            expectation,
            reference,
            observed: last_seen.into_inner(),
            source,
        })
    }
}
