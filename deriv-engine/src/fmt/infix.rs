//! Human-readable infix text.

use crate::fmt::{needs_brackets, Side};
use crate::node::Node;
use crate::vars::VarTable;
use std::fmt::{self, Write};

/// Writes the subtree as infix text. Parenthesization follows [`needs_brackets`]; unary
/// operators print as function applications (`sin(x)`).
pub(crate) fn write_infix<W: Write>(out: &mut W, node: &Node, vars: &VarTable) -> fmt::Result {
    match node {
        Node::Num(value) => write!(out, "{value}"),
        Node::Var(id) => out.write_str(vars.name(*id)),
        Node::Op { op, left: Some(left), right } => {
            let wrap_left = needs_brackets(left, *op, Side::Left);
            let wrap_right = needs_brackets(right, *op, Side::Right);

            if wrap_left {
                out.write_char('(')?;
            }
            write_infix(out, left, vars)?;
            if wrap_left {
                out.write_char(')')?;
            }

            write!(out, " {} ", op.symbol())?;

            if wrap_right {
                out.write_char('(')?;
            }
            write_infix(out, right, vars)?;
            if wrap_right {
                out.write_char(')')?;
            }

            Ok(())
        }
        Node::Op { op, left: None, right } => {
            write!(out, "{}(", op.symbol())?;
            write_infix(out, right, vars)?;
            out.write_char(')')
        }
    }
}
