//! Integration tests for the sorted-merge set algebra.

use ordseq::prelude::*;
use rstest::rstest;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("ordseq=trace"))
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Boundary scenarios
// =============================================================================

#[rstest]
fn union_of_empty_sequences_is_empty() {
    init_tracing();
    let empty: [&str; 0] = [];
    assert_eq!(union(&empty, &empty), Vec::<&str>::new());
}

#[rstest]
fn union_with_empty_right_operand() {
    assert_eq!(union(&["A"], &[]), vec!["A"]);
}

#[rstest]
fn intersect_keeps_shared_value() {
    assert_eq!(intersect(&["a", "b"], &["b"]), vec!["b"]);
}

#[rstest]
fn difference_removes_every_other_letter() {
    assert_eq!(
        difference(&["a", "b", "c", "d", "e"], &["b", "d"]),
        vec!["a", "c", "e"]
    );
}

#[rstest]
fn subtract_from_absent_is_present_and_empty() {
    let absent: Sequence<&str> = Sequence::absent();
    let result = absent.subtract(["tom", "bob"]);
    assert!(!result.is_absent());
    assert!(result.is_empty());
}

#[rstest]
fn difference_from_absent_is_present_and_empty() {
    let absent: Sequence<&str> = Sequence::absent();
    let result = absent.difference(["tom", "bob"]);
    assert!(!result.is_absent());
    assert!(result.is_empty());
}

#[rstest]
fn union_with_absent_materializes_other_operand() {
    let absent: Sequence<&str> = Sequence::absent();
    let result = absent.union(["b", "a", "b"]);
    assert_eq!(result.into_option(), Some(vec!["a", "b"]));
}

#[rstest]
fn sorted_index_below_range_is_not_found() {
    let alphabet: Vec<String> = ('a'..='z').map(String::from).collect();
    assert_eq!(sorted_index(&alphabet, "!"), None);
}

// =============================================================================
// Subtract and difference agree on the surviving values
// =============================================================================

#[rstest]
#[case::empty(vec![], vec![], vec![])]
#[case::alternate(vec!["a", "b", "c", "d", "e"], vec!["b", "d"], vec!["a", "c", "e"])]
#[case::all_removed(vec!["a", "a"], vec!["a", "l"], vec![])]
#[case::from_empty(vec![], vec!["a", "l"], vec![])]
#[case::names(vec!["tom", "bob"], vec!["jack", "bob"], vec!["tom"])]
#[case::nothing_removed(vec!["tom", "bob"], vec![], vec!["tom", "bob"])]
#[case::from_empty_names(vec![], vec!["tom", "bob"], vec![])]
#[case::identical(vec!["tom", "bob"], vec!["tom", "bob"], vec![])]
fn subtract_and_difference(
    #[case] input: Vec<&str>,
    #[case] removed: Vec<&str>,
    #[case] expected: Vec<&str>,
) {
    let subtracted = Sequence::from(input.clone()).subtract(&removed);
    assert_eq!(subtracted.as_slice(), expected.as_slice());
    assert_eq!(difference(&input, &removed), sort(&expected));
}

// =============================================================================
// compare callbacks
// =============================================================================

#[rstest]
fn compare_reports_each_side_in_ascending_order() {
    init_tracing();
    let mut left_only = Vec::new();
    let mut both = Vec::new();
    let mut right_only = Vec::new();

    compare(
        &[9, 1, 5, 5, 3],
        &[4, 3, 9, 8],
        &mut MergeCallbacks::new()
            .on_left_only(|element: &i32| left_only.push(*element))
            .on_equal(|element: &i32| both.push(*element))
            .on_right_only(|element: &i32| right_only.push(*element)),
    );

    assert_eq!(left_only, vec![1, 5]);
    assert_eq!(both, vec![3, 9]);
    assert_eq!(right_only, vec![4, 8]);
}

#[rstest]
fn compare_with_only_equal_callback() {
    let mut shared = Vec::new();
    compare(
        &["x", "y"],
        &["y", "z"],
        &mut MergeCallbacks::new().on_equal(|element: &&str| shared.push(element.len())),
    );
    assert_eq!(shared, vec![1]);
}

#[rstest]
fn custom_visitor_counts_memberships() {
    #[derive(Default)]
    struct Tally {
        left: usize,
        both: usize,
        right: usize,
    }

    impl<T> MergeVisitor<T> for Tally {
        fn left_only(&mut self, _element: &T) {
            self.left += 1;
        }

        fn both(&mut self, _element: &T) {
            self.both += 1;
        }

        fn right_only(&mut self, _element: &T) {
            self.right += 1;
        }
    }

    let mut tally = Tally::default();
    compare(&["a", "b", "b", "c"], &["c", "d"], &mut tally);
    assert_eq!((tally.left, tally.both, tally.right), (2, 1, 1));
}

#[rstest]
fn sorted_merge_on_normalized_inputs() {
    let left = uniq(&[3, 1, 2]);
    let right = uniq(&[2, 4]);
    let memberships: Vec<Membership> = sorted_merge(&left, &right)
        .map(|(membership, _)| membership)
        .collect();
    assert_eq!(
        memberships,
        vec![
            Membership::LeftOnly,
            Membership::Both,
            Membership::LeftOnly,
            Membership::RightOnly,
        ]
    );
}

#[rstest]
fn set_operations_work_with_owned_strings() {
    let left: Vec<String> = vec!["pear".into(), "apple".into(), "fig".into()];
    let right: Vec<String> = vec!["fig".into(), "kiwi".into()];
    assert_eq!(intersect(&left, &right), vec!["fig".to_string()]);
    assert_eq!(
        symmetric_difference(&left, &right),
        vec!["apple".to_string(), "kiwi".to_string(), "pear".to_string()]
    );
}
