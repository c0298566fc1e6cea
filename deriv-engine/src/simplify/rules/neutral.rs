//! Neutral- and absorbing-element elimination.
//!
//! The surviving child is cloned into place of the rewritten node; the excised operator node and
//! the non-surviving child are dropped by the assignment in the driver.

use crate::node::Node;
use crate::op::Op;
use crate::simplify::num_eq;

/// True if the node is a numeric leaf equal to `value` up to epsilon.
fn is_num(node: &Node, value: f64) -> bool {
    node.as_num().is_some_and(|num| num_eq(num, value))
}

fn children(node: &Node, op: Op) -> Option<(&Node, &Node)> {
    match node {
        Node::Op { op: found, left: Some(left), right } if *found == op => {
            Some((left.as_ref(), right.as_ref()))
        }
        _ => None,
    }
}

/// `0 + a = a`, `a + 0 = a`
pub(crate) fn add_zero(node: &Node) -> Option<Node> {
    let (left, right) = children(node, Op::Add)?;
    if is_num(left, 0.0) {
        Some(right.clone())
    } else if is_num(right, 0.0) {
        Some(left.clone())
    } else {
        None
    }
}

/// `a - 0 = a`
pub(crate) fn sub_zero(node: &Node) -> Option<Node> {
    let (left, right) = children(node, Op::Sub)?;
    if is_num(right, 0.0) {
        Some(left.clone())
    } else {
        None
    }
}

/// `x - x = 0`, for the same variable slot on both sides.
pub(crate) fn sub_self(node: &Node) -> Option<Node> {
    let (left, right) = children(node, Op::Sub)?;
    match (left, right) {
        (Node::Var(a), Node::Var(b)) if a == b => Some(Node::Num(0.0)),
        _ => None,
    }
}

/// `1 * a = a`, `a * 1 = a`
pub(crate) fn mul_one(node: &Node) -> Option<Node> {
    let (left, right) = children(node, Op::Mul)?;
    if is_num(left, 1.0) {
        Some(right.clone())
    } else if is_num(right, 1.0) {
        Some(left.clone())
    } else {
        None
    }
}

/// `0 * a = 0`, `a * 0 = 0`; the other subtree is discarded.
pub(crate) fn mul_zero(node: &Node) -> Option<Node> {
    let (left, right) = children(node, Op::Mul)?;
    if is_num(left, 0.0) || is_num(right, 0.0) {
        Some(Node::Num(0.0))
    } else {
        None
    }
}

/// `a / 1 = a`
pub(crate) fn div_one(node: &Node) -> Option<Node> {
    let (left, right) = children(node, Op::Div)?;
    if is_num(right, 1.0) {
        Some(left.clone())
    } else {
        None
    }
}

/// `1 ^ a = 1`, `a ^ 0 = 1`, `a ^ 1 = a`
pub(crate) fn pow_collapse(node: &Node) -> Option<Node> {
    let (left, right) = children(node, Op::Pow)?;
    if is_num(left, 1.0) || is_num(right, 0.0) {
        Some(Node::Num(1.0))
    } else if is_num(right, 1.0) {
        Some(left.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::node::{add, div, mul, num, pow, sin, sub, var};

    #[test]
    fn epsilon_absorbs_float_noise() {
        // 0.1 + 0.2 - 0.3 leaves ~5.5e-17 behind
        let residue = 0.1 + 0.2 - 0.3;
        assert_eq!(add_zero(&add(num(residue), var(0))), Some(var(0)));
    }

    #[test]
    fn sub_self_needs_the_same_slot() {
        assert_eq!(sub_self(&sub(var(2), var(2))), Some(num(0.0)));
        assert_eq!(sub_self(&sub(var(0), var(1))), None);
        // numbers are folded by pass C, not here
        assert_eq!(sub_self(&sub(num(2.0), num(2.0))), None);
    }

    #[test]
    fn mul_zero_discards_the_other_subtree() {
        assert_eq!(mul_zero(&mul(num(0.0), sin(var(0)))), Some(num(0.0)));
    }

    #[test]
    fn pow_identities() {
        assert_eq!(pow_collapse(&pow(num(1.0), var(0))), Some(num(1.0)));
        assert_eq!(pow_collapse(&pow(var(0), num(0.0))), Some(num(1.0)));
        assert_eq!(pow_collapse(&pow(var(0), num(1.0))), Some(var(0)));
        assert_eq!(pow_collapse(&pow(var(0), num(2.0))), None);
    }

    #[test]
    fn rules_ignore_other_operators() {
        assert_eq!(add_zero(&div(num(0.0), var(0))), None);
        assert_eq!(div_one(&mul(var(0), num(1.0))), None);
    }
}
