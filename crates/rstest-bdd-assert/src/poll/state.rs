//! Sampling state machine shared by the blocking and async pollers.

use std::fmt::{self, Debug, Display};
use std::time::Duration;

use crate::{AssertionBehavior, AssertionError, Mode, PollConfig};

/// Lower bound on the sleep between samples so a zero interval still lets
/// time advance. The last sleep before the deadline may be shorter.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// What the poller should do after recording a sample.
#[derive(Debug)]
pub(crate) enum Next {
    Satisfied,
    Sleep(Duration),
    Failed(AssertionError),
}

/// Tracks one assertion from its first sample to its outcome.
pub(crate) struct PollState<T> {
    expected: T,
    behavior: AssertionBehavior,
    context: String,
    timeout: Duration,
    interval: Duration,
    samples: usize,
}

impl<T: PartialEq + Debug> PollState<T> {
    pub(crate) fn new(
        expected: T,
        behavior: AssertionBehavior,
        context: &dyn Display,
        config: PollConfig,
    ) -> Self {
        let state = Self {
            expected,
            behavior,
            context: context.to_string(),
            timeout: config.timeout(),
            interval: config.interval().max(MIN_INTERVAL),
            samples: 0,
        };
        if behavior.mode() == Mode::Eventual {
            log::debug!(
                "{}: waiting up to {:?} to {} {:?}",
                state.context,
                state.timeout,
                behavior,
                state.expected
            );
        }
        state
    }

    /// Record the sample taken `elapsed` after the first one.
    ///
    /// Probe errors count as a non-matching sample.
    pub(crate) fn observe<E: Display>(
        &mut self,
        observation: Result<T, E>,
        elapsed: Duration,
    ) -> Next {
        self.samples = self.samples.saturating_add(1);
        let matched = match &observation {
            Ok(value) => {
                log::trace!("{}: sample {} observed {value:?}", self.context, self.samples);
                self.behavior.polarity().holds(value, &self.expected)
            }
            Err(err) => {
                log::debug!(
                    "{}: probe failed on sample {}, treating as no match: {err}",
                    self.context,
                    self.samples
                );
                false
            }
        };
        if matched {
            if self.behavior.mode() == Mode::Eventual {
                log::debug!(
                    "{}: condition met after {elapsed:?} ({} samples)",
                    self.context,
                    self.samples
                );
            }
            return Next::Satisfied;
        }
        let observed = Observed(&observation).to_string();
        if self.behavior.mode() == Mode::Instant {
            return Next::Failed(AssertionError::Unmet {
                context: self.context.clone(),
                behavior: self.behavior,
                expected: format!("{:?}", self.expected),
                observed,
            });
        }
        let remaining = self.timeout.saturating_sub(elapsed);
        if remaining.is_zero() {
            log::debug!(
                "{}: gave up after {elapsed:?}, last observed {observed}",
                self.context
            );
            return Next::Failed(AssertionError::Timeout {
                context: self.context.clone(),
                behavior: self.behavior,
                expected: format!("{:?}", self.expected),
                observed,
                waited: elapsed,
            });
        }
        Next::Sleep(self.interval.min(remaining))
    }
}

/// Renders an observation for failure messages.
struct Observed<'a, T, E>(&'a Result<T, E>);

impl<T: Debug, E: Display> Display for Observed<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Ok(value) => write!(f, "{value:?}"),
            Err(err) => write!(f, "<probe error: {err}>"),
        }
    }
}
