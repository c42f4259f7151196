//! End-to-end tests of the whole pipeline: bracket string -> unbalanced
//! binary tree -> AVL tree -> traversal orders.

use arbor::analyze_source;
use arbor_avl::AvlTree;
use arbor_parser::{parse_tree, ParseError};
use pretty_assertions::assert_eq;

#[test]
fn scenario_nested_example() {
    // (8 (9 (5)) (1)): the unbalanced tree keeps the source nesting, the
    // AVL tree sorts the same values.
    let report = analyze_source("(8 (9 (5)) (1))").expect("analyze failed");
    assert_eq!(report.depth_first, vec![8, 9, 5, 1]);
    assert_eq!(report.in_order, vec![1, 5, 8, 9]);
}

#[test]
fn scenario_degenerate_chain_rebalances() {
    let report = analyze_source("(1 (2 (3)))").expect("analyze failed");
    assert_eq!(report.breadth_first, vec![2, 1, 3]);
}

#[test]
fn scenario_three_children_is_rejected() {
    let err = analyze_source("(5 (3) (8) (9))").unwrap_err();
    assert!(matches!(err, ParseError::TooManyChildren { .. }));
}

#[test]
fn scenario_unbalanced_brackets_fail_the_pre_pass() {
    let err = analyze_source("(5 (3").unwrap_err();
    assert!(matches!(err, ParseError::UnclosedParen { .. }));
}

#[test]
fn scenario_remove_root_of_two_node_tree() {
    let mut avl = AvlTree::new();
    avl.insert(5);
    avl.insert(3);
    avl.remove(5);
    assert_eq!(avl.in_order(), vec![3]);
    assert_eq!(avl.height(), 1);
}

#[test]
fn round_trip_preserves_the_value_set() {
    let source = "(50 (20 (10) (30)) (80 (70) (90)))";
    let tree = parse_tree(source).expect("parse failed");
    let mut values = tree.depth_first();

    let avl: AvlTree = values.iter().copied().collect();
    values.sort_unstable();
    values.dedup();
    assert_eq!(avl.in_order(), values);
    assert!(avl.is_balanced());
}

#[test]
fn every_parsed_value_is_searchable() {
    let report_source = "(8 (9 (5)) (1))";
    let tree = parse_tree(report_source).expect("parse failed");
    let avl: AvlTree = tree.depth_first().into_iter().collect();
    for value in tree.depth_first() {
        assert!(avl.contains(value), "value {value} missing from AVL tree");
    }
    assert!(!avl.contains(1000));
}

#[test]
fn negative_values_flow_through_the_whole_pipeline() {
    let report = analyze_source("(-3 (-7) (4))").expect("analyze failed");
    assert_eq!(report.depth_first, vec![-3, -7, 4]);
    assert_eq!(report.in_order, vec![-7, -3, 4]);
}

#[test]
fn absent_subtree_markers_parse_through() {
    let report = analyze_source("(5 () (7))").expect("analyze failed");
    assert_eq!(report.depth_first, vec![5, 7]);
    assert_eq!(report.breadth_first, vec![5, 7]);
}

#[test]
fn large_chain_stays_logarithmic() {
    let depth = 128;
    let mut source = String::new();
    for i in 0..depth {
        source.push_str(&format!("({i} "));
    }
    source.push_str(&")".repeat(depth));

    let report = analyze_source(&source).expect("analyze failed");
    assert_eq!(report.node_count, depth);
    // 128 nodes: a plain BST chain would be 128 deep, AVL stays at 8.
    assert_eq!(report.avl_height, 8);
    assert_eq!(
        report.in_order,
        (0..depth as i64).collect::<Vec<_>>()
    );
}
