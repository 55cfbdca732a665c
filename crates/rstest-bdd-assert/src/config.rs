//! Poll timing configuration.
//!
//! Eventual assertions read their deadline and sampling interval from a
//! [`PollConfig`]. The process-wide value resolves, in order, from an
//! in-process override, the `RSTEST_BDD_ASSERT_*` environment variables and
//! finally the built-in defaults.

use std::env;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use crate::ConfigError;

/// Environment variable holding the eventual-check timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "RSTEST_BDD_ASSERT_TIMEOUT_MS";

/// Environment variable holding the poll interval in milliseconds.
pub const INTERVAL_ENV: &str = "RSTEST_BDD_ASSERT_POLL_INTERVAL_MS";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_INTERVAL_MS: u64 = 200;

static POLL_CONFIG_OVERRIDE: RwLock<Option<PollConfig>> = RwLock::new(None);

/// Deadline and sampling interval for eventual assertions.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use rstest_bdd_assert::PollConfig;
///
/// let config = PollConfig::default()
///     .with_timeout(Duration::from_secs(2))
///     .with_interval(Duration::from_millis(50));
/// assert_eq!(config.timeout(), Duration::from_secs(2));
/// assert_eq!(config.interval(), Duration::from_millis(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    timeout: Duration,
    interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

impl PollConfig {
    /// Build a configuration from explicit durations.
    #[must_use]
    pub const fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    /// Replace the overall deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the delay between samples.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Maximum time an eventual check keeps sampling.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Delay between consecutive samples.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Load configuration from the environment.
    ///
    /// Reads [`TIMEOUT_ENV`] and [`INTERVAL_ENV`], falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDuration`] when a variable is not a whole
    /// number of milliseconds and [`ConfigError::ZeroInterval`] when the
    /// interval is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|variable| env::var(variable).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// [`PollConfig::from_env`] delegates here with [`std::env::var`].
    ///
    /// # Errors
    ///
    /// Same as [`PollConfig::from_env`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use rstest_bdd_assert::{INTERVAL_ENV, PollConfig};
    ///
    /// let config = PollConfig::from_lookup(|name| {
    ///     (name == INTERVAL_ENV).then(|| "20".to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(config.interval(), Duration::from_millis(20));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let timeout = read_millis(&lookup, TIMEOUT_ENV)?.unwrap_or(defaults.timeout);
        let interval = read_millis(&lookup, INTERVAL_ENV)?.unwrap_or(defaults.interval);
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval {
                variable: INTERVAL_ENV,
            });
        }
        Ok(Self { timeout, interval })
    }

    /// Resolve the configuration used by the free assertion functions.
    ///
    /// An override installed with [`set_poll_config_override`] wins. Otherwise
    /// the environment is consulted; invalid values are logged and replaced by
    /// the defaults.
    #[must_use]
    pub fn current() -> Self {
        if let Some(config) = override_state() {
            return config;
        }
        Self::from_env().unwrap_or_else(|err| {
            log::warn!("ignoring poll configuration from environment: {err}");
            Self::default()
        })
    }
}

fn read_millis<F>(lookup: &F, variable: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(variable) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|_| ConfigError::InvalidDuration {
            variable,
            value: raw,
        })
}

fn override_state() -> Option<PollConfig> {
    *POLL_CONFIG_OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Override the poll configuration for the current process.
///
/// Tests may call [`clear_poll_config_override`] to restore environment
/// driven behaviour afterwards.
pub fn set_poll_config_override(config: PollConfig) {
    *POLL_CONFIG_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(config);
}

/// Remove any in-process poll configuration override.
pub fn clear_poll_config_override() {
    *POLL_CONFIG_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = None;
}
