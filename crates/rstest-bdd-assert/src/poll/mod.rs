//! Polling assertions over possibly asynchronous state.
//!
//! A check samples a probe and compares each value with an expectation. The
//! [`AssertionBehavior`] decides whether one sample settles the matter
//! (`be`, `be not`) or whether sampling repeats on a fixed interval until the
//! condition holds or the deadline passes (`become`, `become not`).
//!
//! Samples are taken at `0, interval, 2 * interval, ...` until the timeout
//! has elapsed, with one final sample at the deadline itself, so a value that
//! settles at any point up to the timeout is accepted. The wait before the
//! final sample is shortened to land on the deadline.

#[cfg(feature = "tokio")]
mod async_poll;
mod state;


use std::convert::Infallible;
use std::fmt::{Debug, Display};

#[cfg(feature = "tokio")]
pub use async_poll::{should_become_async, should_satisfy_async, try_should_become_async};

use crate::{AssertionBehavior, AssertionError, Clock, PollConfig, SystemClock};
use state::{Next, PollState};

/// Runs assertions with a fixed [`PollConfig`] against a [`Clock`].
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::time::Duration;
/// use rstest_bdd_assert::{AssertionBehavior, ManualClock, PollConfig, Poller};
///
/// let calls = Cell::new(0);
/// let poller = Poller::with_clock(
///     PollConfig::new(Duration::from_secs(1), Duration::from_millis(100)),
///     ManualClock::new(),
/// );
/// let result = poller.should_become(
///     || {
///         calls.set(calls.get() + 1);
///         if calls.get() < 3 { "loading" } else { "ready" }
///     },
///     "ready",
///     AssertionBehavior::Become,
///     "status banner",
/// );
/// assert!(result.is_ok());
/// assert_eq!(calls.get(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Poller<C = SystemClock> {
    config: PollConfig,
    clock: C,
}

impl Default for Poller<SystemClock> {
    fn default() -> Self {
        Self::new(PollConfig::current())
    }
}

impl Poller<SystemClock> {
    /// Create a poller that sleeps on the calling thread.
    #[must_use]
    pub const fn new(config: PollConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> Poller<C> {
    /// Create a poller driven by a custom clock.
    #[must_use]
    pub const fn with_clock(config: PollConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Configuration applied to eventual checks.
    #[must_use]
    pub const fn config(&self) -> PollConfig {
        self.config
    }

    /// Clock used to measure the deadline and sleep between samples.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Assert that the sampled value satisfies `behavior` against `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::Unmet`] when an instant check fails and
    /// [`AssertionError::Timeout`] when an eventual check runs out of time.
    pub fn should_become<T, F>(
        &self,
        mut sampler: F,
        expected: T,
        behavior: AssertionBehavior,
        context: impl Display,
    ) -> Result<(), AssertionError>
    where
        T: PartialEq + Debug,
        F: FnMut() -> T,
    {
        self.try_should_become(|| Ok::<_, Infallible>(sampler()), expected, behavior, context)
    }

    /// Like [`Poller::should_become`] for probes that can fail.
    ///
    /// A probe error is a non-matching sample: eventual checks keep polling
    /// and report the error only if it is still the last observation when the
    /// deadline passes.
    ///
    /// # Errors
    ///
    /// Same as [`Poller::should_become`].
    pub fn try_should_become<T, E, F>(
        &self,
        mut sampler: F,
        expected: T,
        behavior: AssertionBehavior,
        context: impl Display,
    ) -> Result<(), AssertionError>
    where
        T: PartialEq + Debug,
        E: Display,
        F: FnMut() -> Result<T, E>,
    {
        let mut state = PollState::new(expected, behavior, &context, self.config);
        let start = self.clock.now();
        loop {
            let observation = sampler();
            let elapsed = self.clock.now().saturating_duration_since(start);
            match state.observe(observation, elapsed) {
                Next::Satisfied => return Ok(()),
                Next::Failed(err) => return Err(err),
                Next::Sleep(interval) => self.clock.sleep(interval),
            }
        }
    }

    /// Assert that a boolean condition evaluates to `expected`.
    ///
    /// # Errors
    ///
    /// Same as [`Poller::should_become`].
    pub fn should_satisfy<F>(
        &self,
        condition: F,
        expected: bool,
        behavior: AssertionBehavior,
        context: impl Display,
    ) -> Result<(), AssertionError>
    where
        F: FnMut() -> bool,
    {
        self.should_become(condition, expected, behavior, context)
    }
}

/// Assert with the process-wide [`PollConfig::current`] on the calling
/// thread.
///
/// # Errors
///
/// See [`Poller::should_become`].
///
/// # Examples
///
/// ```
/// use rstest_bdd_assert::{AssertionBehavior, should_become};
///
/// let title = Some("Inbox".to_string());
/// should_become(|| title.clone(), Some("Inbox".into()), AssertionBehavior::Be, "page title")
///     .unwrap();
/// ```
pub fn should_become<T, F>(
    sampler: F,
    expected: T,
    behavior: AssertionBehavior,
    context: impl Display,
) -> Result<(), AssertionError>
where
    T: PartialEq + Debug,
    F: FnMut() -> T,
{
    Poller::default().should_become(sampler, expected, behavior, context)
}

/// Fallible-probe counterpart of [`should_become`].
///
/// # Errors
///
/// See [`Poller::try_should_become`].
pub fn try_should_become<T, E, F>(
    sampler: F,
    expected: T,
    behavior: AssertionBehavior,
    context: impl Display,
) -> Result<(), AssertionError>
where
    T: PartialEq + Debug,
    E: Display,
    F: FnMut() -> Result<T, E>,
{
    Poller::default().try_should_become(sampler, expected, behavior, context)
}

/// Boolean counterpart of [`should_become`].
///
/// # Errors
///
/// See [`Poller::should_satisfy`].
pub fn should_satisfy<F>(
    condition: F,
    expected: bool,
    behavior: AssertionBehavior,
    context: impl Display,
) -> Result<(), AssertionError>
where
    F: FnMut() -> bool,
{
    Poller::default().should_satisfy(condition, expected, behavior, context)
}
