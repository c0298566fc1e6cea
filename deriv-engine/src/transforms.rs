//! Transforms built on top of differentiation: tangent lines, Taylor polynomials, and
//! expression differences.
//!
//! The tangent and Taylor transforms need `f` and its derivatives *at a point*, so they pin the
//! chosen variable to the expansion point for the duration of the computation. The pin lives in
//! a [`ScopedValue`] guard and is undone on every path out of the transform, early errors
//! included; callers observe their expression unchanged.

use crate::derivative::differentiate;
use crate::error::EngineError;
use crate::eval::eval_tree;
use crate::expr::Expr;
use crate::node::{self, Node, VarId};
use crate::simplify::{simplify, simplify_tree};
use crate::vars::{ScopedValue, VarTable};
use log::debug;

/// `n!`, with the domain quirks of the original helper: `0! = 1`, and a negative argument
/// returns the sentinel `-1`.
pub fn factorial(n: i64) -> i64 {
    if n < 0 {
        return -1;
    }
    (1..=n).product()
}

/// Builds the tangent line to the expression at `var = at`:
/// `f(v0) - f'(v0) * v0 + f'(v0) * var`.
///
/// The expression is borrowed mutably only for the scoped pin of the variable value; its tree
/// and table are left exactly as they were.
pub fn tangent(expr: &mut Expr, var: &str, at: f64) -> Result<Expr, EngineError> {
    let id = lookup(&expr.vars, var)?;

    let mut derived = crate::derivative::differentiate_expression(expr, var)?;

    let value_at = {
        let guard = ScopedValue::new(&mut expr.vars, id, at);
        eval_tree(&expr.root, guard.table())?
    };
    let slope_at = {
        let guard = ScopedValue::new(&mut derived.vars, id, at);
        eval_tree(&derived.root, guard.table())?
    };

    let root = node::add(
        node::sub(
            node::num(value_at),
            node::mul(node::num(slope_at), node::num(at)),
        ),
        node::mul(node::num(slope_at), node::var(id)),
    );

    let mut result = Expr::from_parts(root, expr.vars.clone());
    simplify(&mut result);
    debug!("tangent at {var} = {at}: {result}");
    Ok(result)
}

/// Builds the Taylor polynomial of the given order around `var = at`:
/// `sum over i of f^(i)(v0) / i! * (var - v0)^i`.
pub fn taylor(expr: &mut Expr, var: &str, at: f64, order: usize) -> Result<Expr, EngineError> {
    let id = lookup(&expr.vars, var)?;

    let root = {
        let guard = ScopedValue::new(&mut expr.vars, id, at);
        taylor_sum(&expr.root, guard.table(), id, at, order)?
    };

    let mut result = Expr::from_parts(root, expr.vars.clone());
    simplify(&mut result);
    debug!("taylor of order {order} at {var} = {at}: {result}");
    Ok(result)
}

/// The un-simplified Taylor sum. `vars` already has the expansion point pinned into slot `id`.
fn taylor_sum(
    root: &Node,
    vars: &VarTable,
    id: VarId,
    at: f64,
    order: usize,
) -> Result<Node, EngineError> {
    let mut current = root.clone();
    let mut sum = node::num(eval_tree(&current, vars)?);

    for exponent in 1..=order {
        current = differentiate(&current, id)?;
        // keep the iterated derivatives from snowballing
        simplify_tree(&mut current);

        let coefficient = eval_tree(&current, vars)? / factorial(exponent as i64) as f64;
        let term = node::mul(
            node::num(coefficient),
            node::pow(
                node::sub(node::var(id), node::num(at)),
                node::num(exponent as f64),
            ),
        );
        sum = node::add(sum, term);
    }

    Ok(sum)
}

/// Builds the difference `a - b` as a fresh expression carrying a copy of `a`'s variable table.
pub fn difference(a: &Expr, b: &Expr) -> Expr {
    let root = node::sub(a.root.clone(), b.root.clone());
    let mut result = Expr::from_parts(root, a.vars.clone());
    simplify(&mut result);
    result
}

fn lookup(vars: &VarTable, var: &str) -> Result<VarId, EngineError> {
    vars.lookup(var)
        .ok_or_else(|| EngineError::NoDiffVariable { name: var.to_owned() })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn factorial_table() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(-3), -1);
    }

    #[test]
    fn tangent_to_the_exponential_at_zero() {
        let mut expr = Expr::parse("exp(x)").unwrap();
        let line = tangent(&mut expr, "x", 0.0).unwrap();
        assert_eq!(line.to_string(), "1 + x");
    }

    #[test]
    fn tangent_touches_and_matches_slope() {
        let at = 1.3;
        let mut expr = Expr::parse("x ^ 2 + sin(x)").unwrap();
        let mut line = tangent(&mut expr, "x", at).unwrap();

        expr.set_var("x", at).unwrap();
        line.set_var("x", at).unwrap();
        assert_relative_eq!(
            line.evaluate().unwrap(),
            expr.evaluate().unwrap(),
            max_relative = 1e-9,
        );

        let mut line_slope = line.differentiate("x").unwrap();
        let mut expr_slope = expr.differentiate("x").unwrap();
        line_slope.set_var("x", at).unwrap();
        expr_slope.set_var("x", at).unwrap();
        assert_relative_eq!(
            line_slope.evaluate().unwrap(),
            expr_slope.evaluate().unwrap(),
            max_relative = 1e-9,
        );
    }

    #[test]
    fn tangent_restores_the_variable_value() {
        let mut expr = Expr::parse("x ^ 2").unwrap();
        expr.set_var("x", 42.0).unwrap();
        tangent(&mut expr, "x", 3.0).unwrap();
        assert_eq!(expr.var_value("x"), Some(42.0));
    }

    #[test]
    fn taylor_of_a_polynomial_is_the_polynomial() {
        let mut expr = Expr::parse("x ^ 2").unwrap();
        let mut poly = taylor(&mut expr, "x", 3.0, 2).unwrap();

        for step in 0..=20 {
            let x = 2.0 + 0.1 * step as f64;
            expr.set_var("x", x).unwrap();
            poly.set_var("x", x).unwrap();
            assert_relative_eq!(
                poly.evaluate().unwrap(),
                expr.evaluate().unwrap(),
                max_relative = 1e-9,
            );
        }
    }

    #[test]
    fn taylor_agrees_to_its_order() {
        // sin x = x - x^3/6 + x^5/120 - ...
        let mut expr = Expr::parse("sin(x)").unwrap();
        let mut poly = taylor(&mut expr, "x", 0.0, 5).unwrap();

        for step in 1..=4 {
            let h = 0.1 / step as f64;
            expr.set_var("x", h).unwrap();
            poly.set_var("x", h).unwrap();
            let truncation = (expr.evaluate().unwrap() - poly.evaluate().unwrap()).abs();
            // the first dropped term is x^7/7!
            assert!(truncation < h.powi(7));
        }
    }

    #[test]
    fn taylor_unknown_variable() {
        let mut expr = Expr::parse("x + 1").unwrap();
        assert_eq!(
            taylor(&mut expr, "q", 0.0, 1),
            Err(EngineError::NoDiffVariable { name: "q".into() }),
        );
    }

    #[test]
    fn difference_of_equal_expressions_collapses() {
        let a = Expr::parse("x + 1").unwrap();
        let diff = difference(&a, &a.clone());
        // (x + 1) - (x + 1) does not cancel symbolically, but evaluates to zero
        let mut diff = diff;
        diff.set_var("x", 5.0).unwrap();
        assert_eq!(diff.evaluate().unwrap(), 0.0);
    }

    #[test]
    fn difference_keeps_the_first_table() {
        let a = Expr::parse("x + y").unwrap();
        let b = Expr::parse("x").unwrap();
        let diff = difference(&a, &b);
        assert_eq!(diff.vars().len(), 2);
    }
}
