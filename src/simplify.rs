//! Filter-tree normalization for the filter-builder UI.
//!
//! [`simplify`] flattens nested logical groups of the same operator so the
//! UI can show one flat list of rows per group, and collapses `NOT`
//! wrapping a single `AND`/`OR` into the synthetic `NOT AND`/`NOT OR`
//! forms the group header renders as a negated operator selector.
//! [`uncollapse_nots`] restores plain `NOT` wrapping; the writer runs it
//! before serializing, so the collapsed forms never appear in CQL output.

use crate::ast::{FilterNode, LogicalNode, LogicalOp};

/// Normalizes a filter tree: flatten, collapse NOTs, flatten again.
/// Idempotent, so trees loaded from already-normalized saved queries pass
/// through unchanged.
pub fn simplify(tree: FilterNode) -> FilterNode {
    let tree = iteratively_simplify(tree);
    let tree = collapse_nots(tree);
    iteratively_simplify(tree)
}

/// Flattens until a full pass changes nothing. Splicing a child's filters
/// into its parent can expose further same-operator nesting, hence the
/// fixed-point loop rather than a single pass.
fn iteratively_simplify(mut tree: FilterNode) -> FilterNode {
    loop {
        let next = flatten_pass(tree.clone());
        if next == tree {
            return next;
        }
        tree = next;
    }
}

/// One post-order pass: any direct child of an `AND`/`OR` node that is
/// itself the same operator has its children spliced up in place. `NOT`
/// and the collapsed forms keep their children intact; splicing through a
/// negation would change the truth condition.
fn flatten_pass(node: FilterNode) -> FilterNode {
    match node {
        FilterNode::Logical(mut logical) => {
            logical.filters = logical.filters.into_iter().map(flatten_pass).collect();
            if matches!(logical.op, LogicalOp::And | LogicalOp::Or) {
                let mut spliced = Vec::with_capacity(logical.filters.len());
                for child in logical.filters {
                    match child {
                        FilterNode::Logical(inner) if inner.op == logical.op => {
                            spliced.extend(inner.filters)
                        }
                        other => spliced.push(other),
                    }
                }
                logical.filters = spliced;
            }
            FilterNode::Logical(logical)
        }
        other => other,
    }
}

/// Post-order rewrite of `NOT` wrapping a single `AND`/`OR` child into
/// the collapsed `NOT AND`/`NOT OR` form holding the grandchildren.
pub fn collapse_nots(node: FilterNode) -> FilterNode {
    match node {
        FilterNode::Logical(mut logical) => {
            logical.filters = logical.filters.into_iter().map(collapse_nots).collect();
            if logical.op == LogicalOp::Not && logical.filters.len() == 1 {
                match logical.filters.remove(0) {
                    FilterNode::Logical(child) if child.op == LogicalOp::And => {
                        return LogicalNode::new(LogicalOp::NotAnd, child.filters).into();
                    }
                    FilterNode::Logical(child) if child.op == LogicalOp::Or => {
                        return LogicalNode::new(LogicalOp::NotOr, child.filters).into();
                    }
                    other => logical.filters.push(other),
                }
            }
            FilterNode::Logical(logical)
        }
        other => other,
    }
}

/// The inverse of [`collapse_nots`]: expands `NOT AND`/`NOT OR` back into
/// `NOT` wrapping a fresh `AND`/`OR` node.
pub fn uncollapse_nots(node: FilterNode) -> FilterNode {
    match node {
        FilterNode::Logical(mut logical) => {
            logical.filters = logical.filters.into_iter().map(uncollapse_nots).collect();
            match logical.op {
                LogicalOp::NotAnd => {
                    LogicalNode::not(LogicalNode::and(logical.filters).into()).into()
                }
                LogicalOp::NotOr => {
                    LogicalNode::not(LogicalNode::or(logical.filters).into()).into()
                }
                _ => FilterNode::Logical(logical),
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ComparisonNode, ComparisonOp};

    fn leaf(property: &str) -> FilterNode {
        ComparisonNode::new(ComparisonOp::Eq, property, 1.0).into()
    }

    #[test]
    fn test_flattens_nested_same_operator() {
        let tree: FilterNode = LogicalNode::and(vec![
            leaf("a"),
            LogicalNode::and(vec![leaf("b"), leaf("c")]).into(),
        ])
        .into();
        let simplified = simplify(tree);
        assert_eq!(
            simplified,
            LogicalNode::and(vec![leaf("a"), leaf("b"), leaf("c")]).into()
        );
    }

    #[test]
    fn test_flattening_repeats_until_fixed_point() {
        let deep: FilterNode = LogicalNode::and(vec![LogicalNode::and(vec![
            LogicalNode::and(vec![leaf("a"), leaf("b")]).into(),
            leaf("c"),
        ])
        .into()])
        .into();
        let simplified = simplify(deep);
        assert_eq!(
            simplified,
            LogicalNode::and(vec![leaf("a"), leaf("b"), leaf("c")]).into()
        );
    }

    #[test]
    fn test_mixed_operators_are_not_flattened() {
        let tree: FilterNode = LogicalNode::and(vec![
            leaf("a"),
            LogicalNode::or(vec![leaf("b"), leaf("c")]).into(),
        ])
        .into();
        assert_eq!(simplify(tree.clone()), tree);
    }

    #[test]
    fn test_collapses_not_over_and() {
        let tree: FilterNode =
            LogicalNode::not(LogicalNode::and(vec![leaf("a"), leaf("b")]).into()).into();
        let simplified = simplify(tree);
        assert_eq!(
            simplified,
            LogicalNode::new(LogicalOp::NotAnd, vec![leaf("a"), leaf("b")]).into()
        );
    }

    #[test]
    fn test_collapse_keeps_not_over_leaf() {
        let tree: FilterNode = LogicalNode::not(leaf("a")).into();
        assert_eq!(simplify(tree.clone()), tree);
    }

    #[test]
    fn test_uncollapse_inverts_collapse() {
        let collapsed: FilterNode =
            LogicalNode::new(LogicalOp::NotOr, vec![leaf("a"), leaf("b")]).into();
        let expanded = uncollapse_nots(collapsed.clone());
        assert_eq!(
            expanded,
            LogicalNode::not(LogicalNode::or(vec![leaf("a"), leaf("b")]).into()).into()
        );
        assert_eq!(collapse_nots(expanded), collapsed);
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let tree: FilterNode = LogicalNode::or(vec![
            LogicalNode::or(vec![leaf("a"), leaf("b")]).into(),
            LogicalNode::not(LogicalNode::and(vec![leaf("c"), leaf("d")]).into()).into(),
        ])
        .into();
        let once = simplify(tree);
        let twice = simplify(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_nested_not_groups_collapse_independently() {
        let tree: FilterNode = LogicalNode::not(
            LogicalNode::and(vec![
                leaf("a"),
                LogicalNode::not(LogicalNode::or(vec![leaf("b"), leaf("c")]).into()).into(),
            ])
            .into(),
        )
        .into();
        let simplified = simplify(tree);
        assert_eq!(
            simplified,
            LogicalNode::new(
                LogicalOp::NotAnd,
                vec![
                    leaf("a"),
                    LogicalNode::new(LogicalOp::NotOr, vec![leaf("b"), leaf("c")]).into(),
                ],
            )
            .into()
        );
    }
}
