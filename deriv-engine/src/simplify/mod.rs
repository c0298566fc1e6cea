//! Algebraic simplification.
//!
//! Simplification runs two passes over the tree — constant folding
//! ([`rules::constants`]) and neutral-element elimination ([`rules::neutral`]) — and repeats the
//! pair until a whole iteration applies no rule. Each rule is a function that takes the node to
//! rewrite and returns `Some(replacement)` if it applies, or `None` if it does not; the driver
//! walks the tree in post-order, so a node's children are already in simplest form by the time
//! the node itself is examined.
//!
//! Every applied rule strictly shrinks the tree, which is what bounds the fixed-point loop: a
//! tree of `n` nodes can absorb at most `n - 1` rewrites before nothing more can shrink.

pub mod rules;

use crate::expr::Expr;
use crate::node::Node;
use log::trace;

/// Numbers closer than this are considered equal, absorbing floating-point noise from
/// constant folding.
pub(crate) const EPSILON: f64 = 1e-9;

/// Equality of numbers up to [`EPSILON`].
pub(crate) fn num_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Simplifies the expression in place, returning the total number of transformations applied.
pub fn simplify(expr: &mut Expr) -> usize {
    simplify_tree(&mut expr.root)
}

/// Simplifies a tree in place, returning the total number of transformations applied.
pub(crate) fn simplify_tree(root: &mut Node) -> usize {
    let mut total = 0;

    loop {
        let folded = apply_pass(root, rules::constants);
        let eliminated = apply_pass(root, rules::neutral);
        trace!("simplify pass: {folded} constants folded, {eliminated} neutral elements");

        if folded + eliminated == 0 {
            break;
        }
        total += folded + eliminated;
    }

    total
}

/// One post-order pass: children first, then the node itself, re-applying the rule while it
/// keeps matching the rewritten node.
fn apply_pass(node: &mut Node, rule: fn(&Node) -> Option<Node>) -> usize {
    let mut count = 0;

    if let Node::Op { left, right, .. } = node {
        if let Some(left) = left {
            count += apply_pass(left, rule);
        }
        count += apply_pass(right, rule);
    }

    while let Some(rewritten) = rule(node) {
        *node = rewritten;
        count += 1;
    }

    count
}
