//! Integration tests for OrderedSet.
//!
//! Covers construction, copy and move semantics, insertion, queries with the
//! fallback-to-last-element policy, traversal and line output.

use ordset::ordered::{OrderedSet, Position};
use rstest::{fixture, rstest};

#[fixture]
fn scenario() -> OrderedSet<i32> {
    let mut set = OrderedSet::new();
    set.insert(-10);
    set.insert(25);
    set.insert_iter([-41, 26, 33]);
    set
}

fn value_of(position: &Position<i32>) -> Option<i32> {
    position.value().copied()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_default_is_empty() {
    let set: OrderedSet<i32> = OrderedSet::default();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.iter().next(), None);
}

#[rstest]
#[case::no_duplicates(vec![3, 1, 2], vec![1, 2, 3])]
#[case::duplicates_collapse(vec![2, 2, 1, 2, 1], vec![1, 2])]
#[case::empty(vec![], vec![])]
#[case::beyond_inline_capacity((0..30).rev().chain(0..30).collect(), (0..30).collect())]
fn test_collect_sorts_and_deduplicates(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    let set: OrderedSet<i32> = input.into_iter().collect();
    assert_eq!(set.to_vec(), expected);
    assert_eq!(set.len(), expected.len());
}

#[rstest]
fn test_from_array() {
    let set = OrderedSet::from([5, 4, 5, 3]);
    assert_eq!(set.to_vec(), vec![3, 4, 5]);
}

#[rstest]
fn test_from_sorted_iter_matches_collect() {
    let from_sorted = OrderedSet::from_sorted_iter(1..=20);
    let collected: OrderedSet<i32> = (1..=20).rev().collect();
    assert_eq!(from_sorted, collected);
}

// =============================================================================
// Copy and move
// =============================================================================

#[rstest]
fn test_clone_is_isolated_from_original(scenario: OrderedSet<i32>) {
    let mut copy = scenario.clone();
    copy.insert(100);
    assert!(copy.remove(&-41));

    assert_eq!(scenario.to_vec(), vec![-41, -10, 25, 26, 33]);
    assert_eq!(copy.to_vec(), vec![-10, 25, 26, 33, 100]);
}

#[rstest]
fn test_clone_deep_copies_owned_values() {
    let original: OrderedSet<String> = ["alpha", "beta"].into_iter().map(String::from).collect();
    let mut copy = original.clone();
    copy.clear();

    assert_eq!(original.len(), 2);
    assert!(original.contains("alpha"));
}

#[rstest]
fn test_clone_from_replaces_rather_than_merges(scenario: OrderedSet<i32>) {
    let mut target: OrderedSet<i32> = [1000, 2000].into();
    target.clone_from(&scenario);
    assert_eq!(target, scenario);
    assert!(!target.contains(&1000));
}

#[rstest]
fn test_clone_from_self_copy_is_noop(scenario: OrderedSet<i32>) {
    let mut set = scenario.clone();
    let snapshot = set.clone();
    set.clone_from(&snapshot);
    assert_eq!(set, scenario);
}

#[rstest]
fn test_move_transfers_contents(scenario: OrderedSet<i32>) {
    let moved = scenario;
    assert_eq!(moved.len(), 5);
    assert_eq!(moved.first(), Some(&-41));
}

#[rstest]
fn test_take_leaves_source_empty_and_usable(mut scenario: OrderedSet<i32>) {
    let target = scenario.take();

    assert!(scenario.is_empty());
    assert_eq!(target.len(), 5);

    scenario.insert(7);
    assert_eq!(scenario.to_vec(), vec![7]);
    assert_eq!(target.to_vec(), vec![-41, -10, 25, 26, 33]);
}

#[rstest]
fn test_take_from_empty_set() {
    let mut source: OrderedSet<i32> = OrderedSet::new();
    let target = source.take();
    assert!(source.is_empty());
    assert!(target.is_empty());
}

// =============================================================================
// Insertion
// =============================================================================

#[rstest]
fn test_insert_duplicate_is_noop(mut scenario: OrderedSet<i32>) {
    assert!(!scenario.insert(25));
    assert_eq!(scenario.len(), 5);
}

#[rstest]
fn test_insert_iter_reports_new_elements(mut scenario: OrderedSet<i32>) {
    assert_eq!(scenario.insert_iter([25, 26, 27, 27]), 1);
    assert_eq!(scenario.to_vec(), vec![-41, -10, 25, 26, 27, 33]);
}

#[rstest]
fn test_extend_from_other_set(mut scenario: OrderedSet<i32>) {
    let other: OrderedSet<i32> = [0, 25, 50].into();
    scenario.extend(other);
    assert_eq!(scenario.to_vec(), vec![-41, -10, 0, 25, 26, 33, 50]);
}

#[rstest]
fn test_clear(mut scenario: OrderedSet<i32>) {
    scenario.clear();
    assert!(scenario.is_empty());
    assert_eq!(scenario.len(), 0);
    assert!(scenario.begin().is_end());
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
#[case::present(25, Some(25))]
#[case::absent_between(27, Some(33))]
#[case::absent_below(-100, Some(33))]
#[case::absent_above(100, Some(33))]
#[case::minimum(-41, Some(-41))]
fn test_find_with_fallback(scenario: OrderedSet<i32>, #[case] probe: i32, #[case] expected: Option<i32>) {
    assert_eq!(value_of(&scenario.find(&probe)), expected);
}

#[rstest]
#[case::present(26, Some(26))]
#[case::absent(27, None)]
fn test_try_find(scenario: OrderedSet<i32>, #[case] probe: i32, #[case] expected: Option<i32>) {
    assert_eq!(scenario.try_find(&probe).as_ref().and_then(value_of), expected);
}

#[rstest]
#[case::exact(25, 25)]
#[case::between(0, 25)]
#[case::below_minimum(-100, -41)]
#[case::above_maximum(34, 33)]
fn test_lower_bound(scenario: OrderedSet<i32>, #[case] probe: i32, #[case] expected: i32) {
    assert_eq!(value_of(&scenario.lower_bound(&probe)), Some(expected));
}

#[rstest]
#[case::exact(26, 33)]
#[case::between(0, 25)]
#[case::below_minimum(-100, -41)]
#[case::maximum_falls_back(33, 33)]
#[case::above_maximum(1000, 33)]
fn test_upper_bound(scenario: OrderedSet<i32>, #[case] probe: i32, #[case] expected: i32) {
    assert_eq!(value_of(&scenario.upper_bound(&probe)), Some(expected));
}

#[rstest]
fn test_try_bounds_signal_absence(scenario: OrderedSet<i32>) {
    assert_eq!(scenario.try_lower_bound(&34), None);
    assert_eq!(scenario.try_upper_bound(&33), None);
    assert_eq!(scenario.try_lower_bound(&33).as_ref().and_then(value_of), Some(33));
}

#[rstest]
fn test_queries_on_empty_set_return_end() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert!(set.find(&1).is_end());
    assert!(set.lower_bound(&1).is_end());
    assert!(set.upper_bound(&1).is_end());
    assert_eq!(set.count(&1), 0);
}

#[rstest]
#[case::present(33, 1)]
#[case::absent(34, 0)]
fn test_count(scenario: OrderedSet<i32>, #[case] probe: i32, #[case] expected: usize) {
    assert_eq!(scenario.count(&probe), expected);
}

#[rstest]
fn test_first_and_last(scenario: OrderedSet<i32>) {
    assert_eq!(scenario.first(), Some(&-41));
    assert_eq!(scenario.last(), Some(&33));
    assert_eq!(value_of(&scenario.begin()), Some(-41));
    assert_eq!(value_of(&scenario.rbegin()), Some(33));
}

#[rstest]
fn test_equal_range_collects_values(scenario: OrderedSet<i32>) {
    let group = scenario.equal_range(&scenario.find(&26)).unwrap();
    assert_eq!(group.to_vec(), vec![26]);
}

#[rstest]
fn test_equal_range_of_end_is_empty(scenario: OrderedSet<i32>) {
    let group = scenario.equal_range(&scenario.end()).unwrap();
    assert!(group.is_empty());
}

#[rstest]
fn test_equal_range_of_stale_position_is_empty(mut scenario: OrderedSet<i32>) {
    let position = scenario.find(&26);
    scenario.erase(&position).unwrap();
    assert!(scenario.equal_range(&position).unwrap().is_empty());
}

// =============================================================================
// Traversal and output
// =============================================================================

#[rstest]
fn test_forward_traversal_is_ascending(scenario: OrderedSet<i32>) {
    let forward: Vec<i32> = scenario.iter().copied().collect();
    assert_eq!(forward, vec![-41, -10, 25, 26, 33]);
}

#[rstest]
fn test_reverse_traversal_is_descending(scenario: OrderedSet<i32>) {
    let reverse: Vec<i32> = scenario.iter_rev().copied().collect();
    assert_eq!(reverse, vec![33, 26, 25, -10, -41]);
}

#[rstest]
fn test_for_loop_over_reference(scenario: OrderedSet<i32>) {
    let mut sum = 0;
    for element in &scenario {
        sum += element;
    }
    assert_eq!(sum, 33);
}

#[rstest]
fn test_into_iter_owned_both_directions(scenario: OrderedSet<i32>) {
    let mut iter = scenario.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(-41));
    assert_eq!(iter.next_back(), Some(33));
    assert_eq!(iter.collect::<Vec<_>>(), vec![-10, 25, 26]);
}

#[rstest]
fn test_write_to_formats_one_line(scenario: OrderedSet<i32>) {
    let mut output = Vec::new();
    scenario.write_to(&mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "-41 -10 25 26 33\n");
}

#[rstest]
fn test_write_to_empty_set_writes_newline() {
    let set: OrderedSet<i32> = OrderedSet::new();
    let mut output = Vec::new();
    set.write_to(&mut output).unwrap();
    assert_eq!(output, b"\n");
}

#[rstest]
fn test_display_and_debug(scenario: OrderedSet<i32>) {
    assert_eq!(format!("{scenario}"), "-41 -10 25 26 33");
    assert_eq!(format!("{scenario:?}"), "{-41, -10, 25, 26, 33}");
}

#[rstest]
fn test_print_succeeds(scenario: OrderedSet<i32>) {
    assert!(scenario.print().is_ok());
}

#[rstest]
fn test_equality_ignores_identity_and_storage_history() {
    let mut grown: OrderedSet<i32> = (1..=12).collect();
    for value in 5..=12 {
        grown.remove(&value);
    }
    let direct: OrderedSet<i32> = (1..=4).collect();
    assert_eq!(grown, direct);
    assert!(grown.is_inline());
}

#[rstest]
fn test_iterators_clone_without_cloning_elements() {
    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Ticket(u32);

    let set: OrderedSet<Ticket> = (1..=12).map(Ticket).collect();
    let mut iter = set.iter();
    iter.next();
    let snapshot = iter.clone();

    assert_eq!(iter.count(), 11);
    assert_eq!(snapshot.rev().next(), Some(&Ticket(12)));
}
