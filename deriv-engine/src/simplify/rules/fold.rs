//! Constant folding.

use crate::node::Node;
use crate::op::Arity;

/// Replaces an operator node whose children are all numeric leaves with a single numeric leaf
/// holding the operator's result. One-armed operators with a numeric operand collapse the same
/// way. Non-finite results are kept as-is; the evaluator treats them the same either way.
pub(crate) fn fold_constants(node: &Node) -> Option<Node> {
    let Node::Op { op, left, right } = node else {
        return None;
    };

    let value = match (op.arity(), left.as_deref(), right.as_num()) {
        (Arity::Binary, Some(left), Some(right)) => op.apply(left.as_num()?, right),
        (Arity::Unary, None, Some(right)) => op.apply(0.0, right),
        _ => return None,
    };

    Some(Node::Num(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::node::{add, num, sin, var};

    #[test]
    fn binary_folding() {
        assert_eq!(fold_constants(&add(num(2.0), num(3.0))), Some(num(5.0)));
    }

    #[test]
    fn unary_folding() {
        assert_eq!(fold_constants(&sin(num(0.0))), Some(num(0.0)));
    }

    #[test]
    fn variables_block_folding() {
        assert_eq!(fold_constants(&add(num(2.0), var(0))), None);
        assert_eq!(fold_constants(&var(0)), None);
    }
}
