//! Error values produced by the engine once an expression tree exists.
//!
//! Syntax problems are reported by the parser with source spans (see
//! [`parser::error`](crate::parser::error)); everything after parsing operates on trees and
//! variable tables, where the failures below are the only ones left. Cyclic trees, shared
//! children and unknown operators cannot be represented at all, so no error values exist for
//! them.

use thiserror::Error;

/// An error that occurred while evaluating, differentiating or transforming an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An operator node's shape does not match its operator's arity. Trees built by the parser
    /// or the construction DSL never trip this; it guards against hand-assembled nodes.
    #[error("the expression tree is malformed")]
    InvalidExpressionFormat,

    /// The variable to differentiate by does not occur in the expression's variable table.
    #[error("the expression has no variable `{name}` to differentiate by")]
    NoDiffVariable {
        /// The name that failed to resolve.
        name: String,
    },

    /// The variable table ran out of slots.
    #[error("too many variables: the table holds at most {capacity}")]
    VarTableFull {
        /// The table's slot capacity.
        capacity: usize,
    },

    /// A variable name exceeds the per-name length bound.
    #[error("variable name `{name}` is longer than {limit} characters")]
    NameTooLong {
        /// The offending name.
        name: String,
        /// The per-name length bound.
        limit: usize,
    },
}
