//! Tokio flavour of the polling loop.
//!
//! The state machine matches the blocking poller; only the clock differs.
//! Sleeping yields to the runtime via [`tokio::time::sleep`], and the
//! deadline is measured with [`tokio::time::Instant`] so paused test runtimes
//! advance virtual time.

use std::convert::Infallible;
use std::fmt::{Debug, Display};

use tokio::time::{Instant, sleep};

use super::state::{Next, PollState};
use crate::{AssertionBehavior, AssertionError, PollConfig};

/// Async counterpart of [`Poller::should_become`](crate::Poller::should_become).
///
/// # Errors
///
/// Returns [`AssertionError::Unmet`] when an instant check fails and
/// [`AssertionError::Timeout`] when an eventual check runs out of time.
pub async fn should_become_async<T, F>(
    mut sampler: F,
    expected: T,
    behavior: AssertionBehavior,
    context: impl Display,
    config: PollConfig,
) -> Result<(), AssertionError>
where
    T: PartialEq + Debug,
    F: FnMut() -> T,
{
    try_should_become_async(
        || Ok::<_, Infallible>(sampler()),
        expected,
        behavior,
        context,
        config,
    )
    .await
}

/// Async counterpart of
/// [`Poller::try_should_become`](crate::Poller::try_should_become).
///
/// # Errors
///
/// Same as [`should_become_async`].
pub async fn try_should_become_async<T, E, F>(
    mut sampler: F,
    expected: T,
    behavior: AssertionBehavior,
    context: impl Display,
    config: PollConfig,
) -> Result<(), AssertionError>
where
    T: PartialEq + Debug,
    E: Display,
    F: FnMut() -> Result<T, E>,
{
    let mut state = PollState::new(expected, behavior, &context, config);
    let start = Instant::now();
    loop {
        let observation = sampler();
        match state.observe(observation, start.elapsed()) {
            Next::Satisfied => return Ok(()),
            Next::Failed(err) => return Err(err),
            Next::Sleep(interval) => sleep(interval).await,
        }
    }
}

/// Async counterpart of [`Poller::should_satisfy`](crate::Poller::should_satisfy).
///
/// # Errors
///
/// Same as [`should_become_async`].
pub async fn should_satisfy_async<F>(
    condition: F,
    expected: bool,
    behavior: AssertionBehavior,
    context: impl Display,
    config: PollConfig,
) -> Result<(), AssertionError>
where
    F: FnMut() -> bool,
{
    should_become_async(condition, expected, behavior, context, config).await
}
