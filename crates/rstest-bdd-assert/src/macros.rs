//! Panicking wrappers for step functions that report failure by panicking.

/// Run [`should_become`](crate::should_become) and panic with the failure
/// message when the check does not pass.
///
/// # Examples
///
/// ```
/// use rstest_bdd_assert::{AssertionBehavior, assert_should_become};
///
/// let url = "https://example.test/home";
/// assert_should_become!(|| url, "https://example.test/home", AssertionBehavior::Be, "current URL");
/// ```
///
/// ```should_panic
/// use rstest_bdd_assert::{AssertionBehavior, assert_should_become};
///
/// assert_should_become!(|| "Login", "Home", AssertionBehavior::Be, "page title");
/// ```
#[macro_export]
macro_rules! assert_should_become {
    ($sampler:expr, $expected:expr, $behavior:expr, $context:expr $(,)?) => {
        if let Err(err) = $crate::should_become($sampler, $expected, $behavior, $context) {
            panic!("{err}");
        }
    };
}

/// Panic unless a list check returned the expected outcome.
///
/// The message names both lists so a failing step shows what was on screen.
///
/// # Examples
///
/// ```
/// use rstest_bdd_assert::{assert_list_check, contains_all};
///
/// let observed = ["Inbox", "Sent"];
/// let reference = ["Sent"];
/// assert_list_check!(contains_all(&observed, &reference), true, &observed, &reference);
/// ```
#[macro_export]
macro_rules! assert_list_check {
    ($check:expr, $expected:expr, $observed:expr, $reference:expr $(,)?) => {{
        let __rstest_bdd_outcome: bool = $check;
        let __rstest_bdd_expected: bool = $expected;
        assert!(
            __rstest_bdd_outcome == __rstest_bdd_expected,
            "list check returned {} (expected {}); observed {:?}, reference {:?}",
            __rstest_bdd_outcome,
            __rstest_bdd_expected,
            $observed,
            $reference,
        );
    }};
}
