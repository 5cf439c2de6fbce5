//! Integration tests for OrderedTree through the public API

use rstest::{fixture, rstest};

use bstree::domain::{DomainError, Key, OrderedTree};

#[fixture]
fn balanced() -> OrderedTree {
    let mut tree = OrderedTree::new();
    for key in [50, 30, 70, 20, 40, 60, 80] {
        assert!(tree.insert(key));
    }
    tree
}

// ============================================================
// Traversal scenarios
// ============================================================

#[rstest]
fn given_seven_keys_when_traversing_in_order_then_ascending(balanced: OrderedTree) {
    assert_eq!(balanced.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
}

#[rstest]
fn given_seven_keys_when_traversing_level_order_then_breadth_first(balanced: OrderedTree) {
    assert_eq!(balanced.level_order(), vec![50, 30, 70, 20, 40, 60, 80]);
}

#[rstest]
fn given_tree_when_traversing_twice_then_same_sequence(balanced: OrderedTree) {
    assert_eq!(balanced.in_order(), balanced.in_order());
    assert_eq!(balanced.level_order(), balanced.level_order());
}

// ============================================================
// Removal scenarios
// ============================================================

#[rstest]
fn given_node_with_two_children_when_removing_then_successor_replaces_it(
    mut balanced: OrderedTree,
) {
    // Act
    let removed = balanced.remove(30);

    // Assert
    assert!(removed);
    assert_eq!(balanced.in_order(), vec![20, 40, 50, 60, 70, 80]);
    assert!(!balanced.search(30));
    assert!(balanced.search(40));
}

#[rstest]
fn given_absent_key_when_removing_then_false_and_unchanged(mut balanced: OrderedTree) {
    assert!(!balanced.remove(999));
    assert_eq!(balanced.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(balanced.level_order(), vec![50, 30, 70, 20, 40, 60, 80]);
}

#[rstest]
#[case::ascending(vec![20, 30, 40, 50, 60, 70, 80])]
#[case::descending(vec![80, 70, 60, 50, 40, 30, 20])]
#[case::root_first(vec![50, 30, 70, 20, 40, 60, 80])]
#[case::mixed(vec![40, 80, 50, 20, 70, 30, 60])]
fn given_all_keys_removed_when_queried_then_tree_is_empty(
    mut balanced: OrderedTree,
    #[case] order: Vec<Key>,
) {
    for &key in &order {
        assert!(balanced.remove(key), "remove {}", key);
        let keys = balanced.in_order();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    assert!(balanced.is_empty());
    assert!(order.iter().all(|&key| !balanced.search(key)));
    assert!(balanced.in_order().is_empty());
    assert!(balanced.level_order().is_empty());
}

// ============================================================
// Duplicates
// ============================================================

#[test]
fn given_key_inserted_twice_when_traversing_then_appears_once() {
    let mut tree = OrderedTree::new();
    tree.insert(10);
    tree.insert(10);

    assert_eq!(tree.in_order(), vec![10]);
    assert_eq!(tree.len(), 1);
}

#[rstest]
fn given_existing_keys_when_reinserted_then_shape_unchanged(mut balanced: OrderedTree) {
    let before = balanced.level_order();
    for key in [50, 20, 80] {
        assert!(!balanced.insert(key));
    }
    assert_eq!(balanced.level_order(), before);
    assert_eq!(balanced.len(), 7);
}

#[test]
fn given_duplicate_when_try_insert_then_reports_duplicate() {
    let mut tree: OrderedTree = [1, 2, 3].into_iter().collect();
    assert_eq!(tree.try_insert(2), Err(DomainError::DuplicateKey(2)));
    assert_eq!(tree.try_insert(4), Ok(()));
}

// ============================================================
// Teardown and extremes
// ============================================================

#[rstest]
fn given_populated_tree_when_torn_down_then_empty_and_reusable(mut balanced: OrderedTree) {
    balanced.teardown();
    assert!(balanced.is_empty());
    assert_eq!(balanced.len(), 0);

    balanced.teardown();
    assert!(balanced.is_empty());

    balanced.extend([3, 1, 2]);
    assert_eq!(balanced.in_order(), vec![1, 2, 3]);
}

#[test]
fn given_empty_tree_when_dropped_then_no_panic() {
    let tree = OrderedTree::new();
    drop(tree);
}

#[test]
fn given_extreme_keys_when_inserted_then_ordered() {
    let tree: OrderedTree = [0, Key::MAX, Key::MIN, -1, 1].into_iter().collect();
    assert_eq!(tree.in_order(), vec![Key::MIN, -1, 0, 1, Key::MAX]);
    assert_eq!(tree.min(), Some(Key::MIN));
    assert_eq!(tree.max(), Some(Key::MAX));
}

#[test]
fn given_descending_input_when_built_then_degenerates_to_left_spine() {
    let tree: OrderedTree = (0..1_000).rev().collect();
    assert_eq!(tree.height(), 1_000);
    assert_eq!(tree.level_order(), (0..1_000).rev().collect::<Vec<_>>());
    assert_eq!(tree.in_order(), (0..1_000).collect::<Vec<_>>());
}

#[rstest]
fn given_tree_when_displayed_then_draws_shape(balanced: OrderedTree) {
    let text = balanced.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "50");
    assert!(lines[1].ends_with("30"));
    assert!(lines.last().is_some_and(|l| l.ends_with("80")));
}
