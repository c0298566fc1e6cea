//! The expression type: a tree plus the variable table its variable leaves point into.

use crate::error::EngineError;
use crate::node::Node;
use crate::parser::{error::Error, Parser};
use crate::vars::{VarTable, DEFAULT_CAPACITY};
use std::fmt;

/// A parsed expression. Owns its tree and its variable table; cloning deep-copies both, and two
/// expressions never share nodes or slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub(crate) root: Node,
    pub(crate) vars: VarTable,
}

impl Expr {
    /// Parses an infix expression, creating a variable table with the default capacity.
    pub fn parse(input: &str) -> Result<Self, Error> {
        Self::parse_with_capacity(input, DEFAULT_CAPACITY)
    }

    /// Parses an infix expression against a variable table bounded to `capacity` slots.
    pub fn parse_with_capacity(input: &str, capacity: usize) -> Result<Self, Error> {
        let mut parser = Parser::new(input)?;
        let mut vars = VarTable::with_capacity(capacity);
        let root = parser.parse_full(&mut vars)?;
        Ok(Self { root, vars })
    }

    /// Bundles an already-built tree with a variable table.
    pub(crate) fn from_parts(root: Node, vars: VarTable) -> Self {
        Self { root, vars }
    }

    /// The root of the expression tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The expression's variable table.
    pub fn vars(&self) -> &VarTable {
        &self.vars
    }

    /// Evaluates the expression under the current variable assignment.
    pub fn evaluate(&self) -> Result<f64, EngineError> {
        crate::eval::evaluate(self)
    }

    /// Simplifies the expression in place, returning the number of transformations applied.
    pub fn simplify(&mut self) -> usize {
        crate::simplify::simplify(self)
    }

    /// Differentiates the expression with respect to the named variable, returning a fresh,
    /// simplified expression.
    pub fn differentiate(&self, var: &str) -> Result<Self, EngineError> {
        crate::derivative::differentiate_expression(self, var)
    }

    /// Assigns a value to the named variable, interning the name if the expression has not seen
    /// it yet.
    pub fn set_var(&mut self, name: &str, value: f64) -> Result<(), EngineError> {
        let id = self.vars.intern(name)?;
        self.vars.set_value(id, value);
        Ok(())
    }

    /// The current value of the named variable, if the expression knows it.
    pub fn var_value(&self, name: &str) -> Option<f64> {
        self.vars.lookup(name).map(|id| self.vars.value(id))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt::infix::write_infix(f, &self.root, &self.vars)
    }
}

#[cfg(test)]
mod tests {
    use deriv_error::ErrorKind as _;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn display_is_infix() {
        let expr = Expr::parse("sin(x)/x + x^2").unwrap();
        assert_eq!(expr.to_string(), "sin(x) / x + x ^ 2");
    }

    #[test]
    fn clones_are_independent() {
        let mut original = Expr::parse("x * y").unwrap();
        original.set_var("x", 2.0).unwrap();
        original.set_var("y", 3.0).unwrap();

        let copy = original.clone();
        drop(copy);
        assert_eq!(original.evaluate().unwrap(), 6.0);

        let mut copy = original.clone();
        copy.set_var("x", 100.0).unwrap();
        assert_eq!(original.evaluate().unwrap(), 6.0);
        assert_eq!(copy.evaluate().unwrap(), 300.0);
    }

    #[test]
    fn capacity_is_passed_through() {
        let err = Expr::parse_with_capacity("a + b + c", 2).unwrap_err();
        assert_eq!(
            err.kind.message(),
            "too many distinct variables (at most 2)",
        );
    }
}
