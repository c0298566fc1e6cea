//! The three textual forms of an expression.
//!
//! All three printers share the same post-order traversal and never mutate the tree:
//!
//! - [`infix`] renders human-readable infix text (this is also the [`Display`] form of
//!   [`Expr`](crate::expr::Expr)), inserting parentheses from operator precedence so that the
//!   output parses back into an equivalent tree;
//! - [`plot`] renders the spelling understood by the external plotting tool;
//! - [`latex`] renders typeset math for the report, naming subtrees once they get too deep to
//!   keep on one page.
//!
//! [`Display`]: std::fmt::Display

pub mod infix;
pub mod latex;
pub mod plot;

use crate::node::Node;
use crate::op::Op;

/// Which side of its parent a child sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Decides whether a child must be parenthesized under its parent operator.
///
/// A child is wrapped when its operator binds strictly weaker than the parent; a right child
/// also at equal precedence (so `a - (b + c)` keeps its shape), and a power on the left at equal
/// precedence (so `(x ^ 2) * 3` reads unambiguously).
pub(crate) fn needs_brackets(child: &Node, parent: Op, side: Side) -> bool {
    let Some(child_op) = child.as_op() else {
        return false;
    };

    match side {
        Side::Left => {
            child_op.precedence() < parent.precedence()
                || (child_op.precedence() == parent.precedence() && child_op == Op::Pow)
        }
        Side::Right => child_op.precedence() <= parent.precedence(),
    }
}
