//! Eventual-consistency assertions and list containment for `rstest-bdd`
//! steps.
//!
//! UI state settles asynchronously, so a step such as
//! `Then page title should become "Inbox"` has to sample the page until the
//! title matches or a deadline passes. This crate provides that polling
//! engine together with the multiset and ordered containment checks used by
//! list steps. Phrase keywords are parsed into [`AssertionBehavior`] once, at
//! the step boundary.

mod behavior;
mod clock;
pub mod config;
mod containment;
mod error;
mod macros;
pub mod poll;

pub use behavior::{AssertionBehavior, BehaviorParseError, Mode, Polarity};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    INTERVAL_ENV, PollConfig, TIMEOUT_ENV, clear_poll_config_override, set_poll_config_override,
};
pub use containment::{contains_all, contains_in_order};
pub use error::{AssertionError, ConfigError};
pub use poll::{Poller, should_become, should_satisfy, try_should_become};
#[cfg(feature = "tokio")]
pub use poll::{should_become_async, should_satisfy_async, try_should_become_async};
