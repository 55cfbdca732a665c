//! Behavioural tests for list containment over exhaustive small inputs.

use rstest::rstest;
use rstest_bdd_assert::{assert_list_check, contains_all, contains_in_order};

const ALPHABET: [&str; 3] = ["a", "b", "c"];

/// Every sequence over `ALPHABET` with at most `max_len` elements.
fn sequences(max_len: usize) -> Vec<Vec<&'static str>> {
    let mut all = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for symbol in ALPHABET {
                let mut extended: Vec<&'static str> = prefix.clone();
                extended.push(symbol);
                next.push(extended);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

fn occurrences(list: &[&str], value: &str) -> usize {
    list.iter().filter(|item| **item == value).count()
}

/// Reference definition: an increasing index sequence exists.
fn is_subsequence(observed: &[&str], reference: &[&str]) -> bool {
    match reference.split_first() {
        None => true,
        Some((head, tail)) => observed
            .iter()
            .enumerate()
            .filter(|(_, value)| *value == head)
            .any(|(index, _)| {
                observed
                    .get(index + 1..)
                    .is_some_and(|rest| is_subsequence(rest, tail))
            }),
    }
}

#[test]
fn unordered_containment_matches_occurrence_counts() {
    let inputs = sequences(4);
    for observed in &inputs {
        for reference in &inputs {
            let expected = ALPHABET
                .iter()
                .all(|value| occurrences(reference, value) <= occurrences(observed, value));
            assert_eq!(
                contains_all(observed, reference),
                expected,
                "observed {observed:?}, reference {reference:?}"
            );
        }
    }
}

#[test]
fn ordered_containment_matches_subsequence_definition() {
    let inputs = sequences(4);
    for observed in &inputs {
        for reference in &inputs {
            assert_eq!(
                contains_in_order(observed, reference),
                is_subsequence(observed, reference),
                "observed {observed:?}, reference {reference:?}"
            );
        }
    }
}

#[test]
fn ordered_containment_implies_unordered_containment() {
    let inputs = sequences(4);
    for observed in &inputs {
        for reference in &inputs {
            if contains_in_order(observed, reference) {
                assert!(contains_all(observed, reference));
            }
        }
    }
}

#[rstest]
#[case(&["b", "c"], true, true)]
#[case(&["c", "b"], true, true)]
#[case(&["a", "a"], false, false)]
#[case(&["b", "a"], true, false)]
fn observed_list_with_repeated_item(
    #[case] reference: &[&str],
    #[case] unordered: bool,
    #[case] ordered: bool,
) {
    let observed = vec!["a".to_string(), "b".into(), "c".into(), "b".into()];
    assert_eq!(contains_all(&observed, reference), unordered);
    assert_eq!(contains_in_order(&observed, reference), ordered);
}

#[test]
fn inputs_are_left_untouched() {
    let observed = vec!["x".to_string(), "y".into()];
    let reference = vec!["y".to_string()];
    let before = (observed.clone(), reference.clone());
    assert!(contains_all(&observed, &reference));
    assert!(contains_in_order(&observed, &reference));
    assert_eq!((observed, reference), before);
}

#[test]
fn list_check_macro_accepts_expected_negative_outcome() {
    let observed = ["Inbox", "Sent"];
    let reference = ["Spam"];
    assert_list_check!(contains_all(&observed, &reference), false, &observed, &reference);
}

#[test]
#[should_panic(expected = "list check returned false (expected true)")]
fn list_check_macro_names_both_lists() {
    let observed = ["Sent", "Inbox"];
    let reference = ["Inbox", "Sent"];
    assert_list_check!(contains_in_order(&observed, &reference), true, &observed, &reference);
}
