//! Symbolic differentiation.
//!
//! Differentiation is a pure post-order rewrite: the input tree is never modified, and the
//! produced tree shares no nodes with it. Leaves follow the two base cases (constants and
//! foreign variables vanish, the target variable becomes `1`); operator nodes dispatch to their
//! entry in the operator table, which combines deep copies of the original children with
//! recursive calls.
//!
//! Raw derivative trees are wasteful — the product rule alone produces shapes like
//! `1 * cos(x) + 0 * x` — which is why [`differentiate_expression`] runs the simplifier over the
//! result before handing it back.

use crate::error::EngineError;
use crate::expr::Expr;
use crate::node::{self, Node, VarId};
use crate::simplify::simplify;
use log::debug;

/// Differentiates a subtree with respect to the variable in slot `var`, producing a new tree.
pub fn differentiate(node: &Node, var: VarId) -> Result<Node, EngineError> {
    match node {
        Node::Num(_) => Ok(node::num(0.0)),
        Node::Var(id) if *id == var => Ok(node::num(1.0)),
        Node::Var(_) => Ok(node::num(0.0)),
        Node::Op { op, .. } => {
            if !node.arity_matches() {
                return Err(EngineError::InvalidExpressionFormat);
            }
            op.derivative(node, var, &|child| differentiate(child, var))
        }
    }
}

/// Differentiates an expression with respect to the named variable, returning a fresh,
/// simplified expression with its own copy of the variable table.
pub fn differentiate_expression(expr: &Expr, var: &str) -> Result<Expr, EngineError> {
    let id = expr
        .vars
        .lookup(var)
        .ok_or_else(|| EngineError::NoDiffVariable { name: var.to_owned() })?;

    let root = differentiate(&expr.root, id)?;
    let mut result = Expr::from_parts(root, expr.vars.clone());
    let transforms = simplify(&mut result);
    debug!("differentiated by `{var}`: {transforms} simplifications applied");

    Ok(result)
}
