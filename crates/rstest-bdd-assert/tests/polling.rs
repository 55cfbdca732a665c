//! Behavioural tests for polling assertions against a real clock.

use std::cell::Cell;
use std::time::{Duration, Instant};

use rstest::rstest;
use rstest_bdd_assert::{
    AssertionBehavior, AssertionError, PollConfig, Poller, assert_should_become,
    clear_poll_config_override, set_poll_config_override, should_become, should_satisfy,
    try_should_become,
};
use serial_test::serial;

struct OverrideGuard;

impl OverrideGuard {
    fn install(timeout: Duration, interval: Duration) -> Self {
        set_poll_config_override(PollConfig::new(timeout, interval));
        Self
    }
}

impl Drop for OverrideGuard {
    fn drop(&mut self) {
        clear_poll_config_override();
    }
}

#[test]
fn eventual_check_stops_polling_once_satisfied() {
    let poller = Poller::new(PollConfig::new(
        Duration::from_secs(5),
        Duration::from_millis(5),
    ));
    let calls = Cell::new(0);
    let started = Instant::now();
    let result = poller.should_become(
        || {
            calls.set(calls.get() + 1);
            calls.get() >= 3
        },
        true,
        AssertionBehavior::Become,
        "toast visible",
    );
    assert_eq!(result, Ok(()));
    assert_eq!(calls.get(), 3);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn eventual_check_waits_out_the_full_timeout_and_no_longer() {
    let timeout = Duration::from_millis(60);
    let poller = Poller::new(PollConfig::new(timeout, Duration::from_millis(10)));
    let started = Instant::now();
    let result = poller.should_become(|| "loading", "ready", AssertionBehavior::Become, "status");
    let waited = started.elapsed();
    let Err(err) = result else {
        panic!("a constant value cannot become something else");
    };
    assert!(err.is_timeout());
    assert_eq!(err.observed(), "\"loading\"");
    assert!(waited >= timeout, "gave up early after {waited:?}");
    assert!(waited < timeout + Duration::from_secs(1), "waited {waited:?}");
}

#[rstest]
#[serial]
#[case(AssertionBehavior::Be, true)]
#[case(AssertionBehavior::BeNot, false)]
#[case(AssertionBehavior::Become, true)]
#[case(AssertionBehavior::BecomeNot, false)]
fn free_functions_use_process_configuration(
    #[case] behavior: AssertionBehavior,
    #[case] passes: bool,
) {
    let _guard = OverrideGuard::install(Duration::from_millis(20), Duration::from_millis(5));
    let result = should_become(|| "/inbox", "/inbox", behavior, "relative URL");
    assert_eq!(result.is_ok(), passes);
}

#[test]
#[serial]
fn free_boolean_check_reports_context() {
    let _guard = OverrideGuard::install(Duration::from_millis(20), Duration::from_millis(5));
    let result = should_satisfy(|| false, true, AssertionBehavior::Become, "current URL is /login");
    let Err(err) = result else {
        panic!("false never becomes true");
    };
    let message = err.to_string();
    assert!(message.starts_with("current URL is /login"), "{message}");
    assert!(message.contains("become true"), "{message}");
    assert!(message.contains("last observed false"), "{message}");
}

#[test]
#[serial]
fn free_fallible_check_swallows_transient_errors() {
    let _guard = OverrideGuard::install(Duration::from_secs(2), Duration::from_millis(2));
    let calls = Cell::new(0);
    let result = try_should_become(
        || {
            calls.set(calls.get() + 1);
            if calls.get() < 4 {
                Err("element is stale")
            } else {
                Ok(Some("Inbox".to_string()))
            }
        },
        Some("Inbox".to_string()),
        AssertionBehavior::Become,
        "page title",
    );
    assert_eq!(result, Ok(()));
    assert_eq!(calls.get(), 4);
}

#[test]
fn unmet_message_includes_expected_and_observed() {
    let err = AssertionError::Unmet {
        context: "page title".into(),
        behavior: AssertionBehavior::Be,
        expected: "Some(\"Inbox\")".into(),
        observed: "None".into(),
    };
    assert_eq!(
        err.to_string(),
        "page title: expected to be Some(\"Inbox\"), but observed None"
    );
}

#[test]
#[serial]
#[should_panic(expected = "expected to be not \"Home\"")]
fn assertion_macro_panics_with_failure_message() {
    let _guard = OverrideGuard::install(Duration::from_millis(20), Duration::from_millis(5));
    assert_should_become!(|| "Home", "Home", AssertionBehavior::BeNot, "page title");
}
