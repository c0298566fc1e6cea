//! The expression form handed to the external plotting tool.
//!
//! Operands are parenthesized unconditionally, so the output needs no precedence knowledge on
//! the plotting side; operator spellings come from the table's
//! [`plot_symbol`](crate::op::Op::plot_symbol) column (`**` for powers, `log` for the natural
//! logarithm, and compound spellings like `1/tan` for the cotangent).

use crate::expr::Expr;
use crate::node::Node;
use crate::vars::VarTable;
use std::fmt::Write;

/// Renders the expression in the plotting tool's spelling.
pub fn plot_expression(expr: &Expr) -> String {
    let mut out = String::new();
    write_plot(&mut out, expr.root(), expr.vars());
    out
}

fn write_plot(out: &mut String, node: &Node, vars: &VarTable) {
    match node {
        Node::Num(value) => {
            // writing into a String cannot fail
            let _ = write!(out, "{value}");
        }
        Node::Var(id) => out.push_str(vars.name(*id)),
        Node::Op { op, left: Some(left), right } => {
            out.push('(');
            write_plot(out, left, vars);
            out.push_str(") ");
            out.push_str(op.plot_symbol());
            out.push_str(" (");
            write_plot(out, right, vars);
            out.push(')');
        }
        Node::Op { op, left: None, right } => {
            out.push_str(op.plot_symbol());
            out.push_str(" (");
            write_plot(out, right, vars);
            out.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn plot(input: &str) -> String {
        plot_expression(&Expr::parse(input).unwrap())
    }

    #[test]
    fn powers_use_double_star() {
        assert_eq!(plot("x ^ 2"), "(x) ** (2)");
    }

    #[test]
    fn logarithm_and_cotangent_spellings() {
        assert_eq!(plot("ln(x)"), "log (x)");
        assert_eq!(plot("ctg(x)"), "1/tan (x)");
        assert_eq!(plot("arcctg(x)"), "pi/2 - atan (x)");
    }

    #[test]
    fn nested_operands_stay_parenthesized() {
        assert_eq!(plot("sin(x) / x"), "(sin (x)) / (x)");
        assert_eq!(plot("x + 2 * x"), "(x) + ((2) * (x))");
    }
}
