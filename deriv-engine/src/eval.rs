//! Numerical evaluation of expression trees.

use crate::error::EngineError;
use crate::expr::Expr;
use crate::node::Node;
use crate::op::Arity;
use crate::vars::VarTable;

/// Evaluates the expression under its current variable assignment.
///
/// Children are evaluated left before right. Non-finite intermediate results (division by zero,
/// logarithms of non-positive values, …) propagate as the usual IEEE values; only a structurally
/// malformed tree is an error. Neither the tree nor the variable table is mutated.
pub fn evaluate(expr: &Expr) -> Result<f64, EngineError> {
    eval_tree(&expr.root, &expr.vars)
}

/// Evaluates a subtree against the given variable table.
pub(crate) fn eval_tree(node: &Node, vars: &VarTable) -> Result<f64, EngineError> {
    match node {
        Node::Num(value) => Ok(*value),
        Node::Var(id) => Ok(vars.value(*id)),
        Node::Op { op, left, right } => match (op.arity(), left) {
            (Arity::Binary, Some(left)) => {
                let left = eval_tree(left, vars)?;
                let right = eval_tree(right, vars)?;
                Ok(op.apply(left, right))
            }
            (Arity::Unary, None) => {
                let right = eval_tree(right, vars)?;
                Ok(op.apply(0.0, right))
            }
            _ => Err(EngineError::InvalidExpressionFormat),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::node::{self, Node};
    use crate::op::Op;

    #[test]
    fn constant_arithmetic() {
        let expr = Expr::parse("2 + 3 * 4").unwrap();
        assert_eq!(evaluate(&expr).unwrap(), 14.0);
    }

    #[test]
    fn variables_read_the_table() {
        let mut expr = Expr::parse("x ^ 2 + y").unwrap();
        expr.set_var("x", 3.0).unwrap();
        expr.set_var("y", 0.5).unwrap();
        assert_eq!(evaluate(&expr).unwrap(), 9.5);
    }

    #[test]
    fn functions_evaluate_their_operand() {
        let mut expr = Expr::parse("sin(x) / x").unwrap();
        expr.set_var("x", 1.0).unwrap();
        let value = evaluate(&expr).unwrap();
        assert!((value - 1.0_f64.sin()).abs() < 1e-12);
    }

    #[test]
    fn non_finite_results_are_not_errors() {
        let expr = Expr::parse("1 / 0").unwrap();
        assert_eq!(evaluate(&expr).unwrap(), f64::INFINITY);

        let expr = Expr::parse("ln(0 - 1)").unwrap();
        assert!(evaluate(&expr).unwrap().is_nan());
    }

    #[test]
    fn malformed_trees_are_rejected() {
        // a hand-assembled `sin` with two children has no meaning
        let broken = Node::Op {
            op: Op::Sin,
            left: Some(Box::new(node::num(1.0))),
            right: Box::new(node::num(2.0)),
        };
        let expr = Expr::from_parts(broken, crate::vars::VarTable::new());
        assert_eq!(evaluate(&expr), Err(EngineError::InvalidExpressionFormat));
    }

    #[test]
    fn evaluation_does_not_mutate() {
        let mut expr = Expr::parse("x + 1").unwrap();
        expr.set_var("x", 2.0).unwrap();
        let before = expr.clone();
        evaluate(&expr).unwrap();
        assert_eq!(expr, before);
    }
}
