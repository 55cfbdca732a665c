//! Time sources for the polling loop.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source and blocking sleep used between samples.
pub trait Clock {
    /// Current monotonic instant.
    fn now(&self) -> Instant;

    /// Block the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Wall-clock implementation backed by [`Instant`] and
/// [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration);
    }
}

/// Virtual clock whose `sleep` advances time instantly.
///
/// Lets tests exercise timeouts without waiting for them.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use rstest_bdd_assert::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.sleep(Duration::from_millis(250));
/// assert_eq!(clock.now() - start, Duration::from_millis(250));
/// assert_eq!(clock.sleeps(), 1);
/// ```
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Cell<Duration>,
    sleeps: Cell<usize>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Create a clock anchored at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
            sleeps: Cell::new(0),
        }
    }

    /// Move virtual time forward without counting a sleep.
    pub fn advance(&self, duration: Duration) {
        self.elapsed.set(self.elapsed.get().saturating_add(duration));
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    /// Number of `sleep` calls observed.
    #[must_use]
    pub fn sleeps(&self) -> usize {
        self.sleeps.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
        self.sleeps.set(self.sleeps.get().saturating_add(1));
    }
}
