//! Report building for the `arbor` command-line tool.
//!
//! The library surface is a single pure function, [`analyze_source`]: it
//! takes bracket-notation text and returns every traversal the tool can
//! print, or the parse error. All I/O and formatting lives in `main.rs`.

use arbor_avl::AvlTree;
use arbor_parser::{parse_tree, ParseError};
use serde::Serialize;

/// Every sequence the tool reports for one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    /// Pre-order walk of the unbalanced tree, i.e. the values in source
    /// encounter order.
    pub depth_first: Vec<i64>,
    /// AVL level order.
    pub breadth_first: Vec<i64>,
    /// AVL pre-order.
    pub pre_order: Vec<i64>,
    /// AVL in-order (ascending).
    pub in_order: Vec<i64>,
    /// AVL post-order.
    pub post_order: Vec<i64>,
    /// Number of distinct values.
    pub node_count: usize,
    /// Height of the rebuilt AVL tree.
    pub avl_height: u32,
}

/// Parses `source`, rebuilds the values as an AVL tree, and collects all
/// traversal orders.
///
/// The AVL tree is fed from the unbalanced tree's pre-order traversal, so
/// duplicates in the source collapse into one node.
pub fn analyze_source(source: &str) -> Result<TraversalReport, ParseError> {
    let tree = parse_tree(source)?;
    let depth_first = tree.depth_first();

    let avl: AvlTree = depth_first.iter().copied().collect();
    log::debug!(
        "rebuilt {} values into an AVL tree of height {}",
        avl.len(),
        avl.height()
    );

    Ok(TraversalReport {
        breadth_first: avl.breadth_first(),
        pre_order: avl.pre_order(),
        in_order: avl.in_order(),
        post_order: avl.post_order(),
        node_count: avl.len(),
        avl_height: avl.height(),
        depth_first,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_for_the_readme_example() {
        let report = analyze_source("(8 (9 (5)) (1))").expect("analyze failed");
        assert_eq!(report.depth_first, vec![8, 9, 5, 1]);
        assert_eq!(report.in_order, vec![1, 5, 8, 9]);
        assert_eq!(report.node_count, 4);
    }

    #[test]
    fn degenerate_chain_is_rebalanced() {
        let report = analyze_source("(1 (2 (3)))").expect("analyze failed");
        assert_eq!(report.breadth_first, vec![2, 1, 3]);
        assert_eq!(report.avl_height, 2);
    }

    #[test]
    fn parse_errors_pass_through() {
        let err = analyze_source("(5 (3) (8) (9))").unwrap_err();
        assert!(matches!(err, ParseError::TooManyChildren { .. }));
    }

    #[test]
    fn duplicate_values_collapse() {
        let report = analyze_source("(5 (5) (5))").expect("analyze failed");
        assert_eq!(report.depth_first, vec![5, 5, 5]);
        assert_eq!(report.node_count, 1);
        assert_eq!(report.in_order, vec![5]);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = analyze_source("(2 (1) (3))").expect("analyze failed");
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["in_order"], serde_json::json!([1, 2, 3]));
    }
}
