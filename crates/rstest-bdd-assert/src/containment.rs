//! Containment checks between an observed list and a reference list.
//!
//! Both checks compare by string value and count duplicates: a reference
//! value listed twice needs two occurrences in the observed list. Callers
//! apply any negation to the returned boolean.

use hashbrown::HashMap;

/// Returns `true` when every reference value occurs in `observed`, ignoring
/// order.
///
/// The comparison is a multiset inclusion. Extra observed values are
/// ignored.
///
/// # Examples
///
/// ```
/// use rstest_bdd_assert::contains_all;
///
/// let observed = ["a", "b", "c", "b"];
/// assert!(contains_all(&observed, &["b", "a", "b"]));
/// assert!(!contains_all(&observed, &["a", "a"]));
/// assert!(contains_all(&observed, &[] as &[&str]));
/// ```
#[must_use]
pub fn contains_all<O, R>(observed: &[O], reference: &[R]) -> bool
where
    O: AsRef<str>,
    R: AsRef<str>,
{
    if reference.len() > observed.len() {
        return false;
    }
    let mut available: HashMap<&str, usize> = HashMap::with_capacity(observed.len());
    for value in observed {
        *available.entry(value.as_ref()).or_insert(0) += 1;
    }
    reference.iter().all(|value| {
        available
            .get_mut(value.as_ref())
            .and_then(|count| {
                *count = count.checked_sub(1)?;
                Some(())
            })
            .is_some()
    })
}

/// Returns `true` when the reference values appear in `observed` in the
/// same relative order.
///
/// Matches need not be adjacent. Each reference value is matched at the
/// first unused position after the previous match, so an observed value is
/// never matched twice.
///
/// # Examples
///
/// ```
/// use rstest_bdd_assert::contains_in_order;
///
/// let observed = ["a", "b", "c", "b"];
/// assert!(contains_in_order(&observed, &["b", "c"]));
/// assert!(contains_in_order(&observed, &["c", "b"]));
/// assert!(!contains_in_order(&observed, &["c", "a"]));
/// ```
#[must_use]
pub fn contains_in_order<O, R>(observed: &[O], reference: &[R]) -> bool
where
    O: AsRef<str>,
    R: AsRef<str>,
{
    let mut remaining = observed.iter();
    reference.iter().all(|wanted| {
        let wanted = wanted.as_ref();
        remaining.any(|value| value.as_ref() == wanted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const OBSERVED: [&str; 4] = ["a", "b", "c", "b"];

    #[rstest]
    #[case(&[], true)]
    #[case(&["a"], true)]
    #[case(&["b", "b"], true)]
    #[case(&["b", "c", "a"], true)]
    #[case(&["a", "a"], false)]
    #[case(&["b", "b", "b"], false)]
    #[case(&["d"], false)]
    #[case(&["a", "b", "c", "b", "a"], false)]
    fn unordered_containment_counts_duplicates(#[case] reference: &[&str], #[case] expected: bool) {
        assert_eq!(contains_all(&OBSERVED, reference), expected);
    }

    #[rstest]
    #[case(&[], true)]
    #[case(&["b", "c"], true)]
    #[case(&["c", "b"], true)]
    #[case(&["a", "c"], true)]
    #[case(&["b", "b"], true)]
    #[case(&["a", "b", "c", "b"], true)]
    #[case(&["c", "a"], false)]
    #[case(&["c", "c"], false)]
    #[case(&["b", "b", "b"], false)]
    #[case(&["a", "d"], false)]
    fn ordered_containment_scans_left_to_right(
        #[case] reference: &[&str],
        #[case] expected: bool,
    ) {
        assert_eq!(contains_in_order(&OBSERVED, reference), expected);
    }

    #[test]
    fn empty_observed_only_contains_empty_reference() {
        let empty: [&str; 0] = [];
        assert!(contains_all(&empty, &empty));
        assert!(contains_in_order(&empty, &empty));
        assert!(!contains_all(&empty, &["a"]));
        assert!(!contains_in_order(&empty, &["a"]));
    }

    #[test]
    fn accepts_owned_and_borrowed_strings() {
        let observed: Vec<String> = OBSERVED.iter().map(ToString::to_string).collect();
        assert!(contains_all(&observed, &["c", "a"]));
        assert!(contains_in_order(&observed, &["a".to_string(), "c".to_string()]));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(!contains_all(&OBSERVED, &["A"]));
        assert!(!contains_in_order(&OBSERVED, &["B"]));
    }
}
