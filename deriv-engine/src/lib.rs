//! A symbolic differentiation and transformation engine for real-valued expressions of named
//! variables.
//!
//! Text goes in, trees come out: the [`tokenizer`] and [`parser`] turn infix input like
//! `sin(x)/x + x^2` into an [`Expr`] — an owned tree of [`Node`]s plus the [`VarTable`] its
//! variable leaves point into. On top of that tree the engine offers:
//!
//! - numerical [evaluation](eval) under the current variable assignment;
//! - [simplification](simplify) — constant folding and neutral-element elimination, iterated to
//!   a fixed point;
//! - symbolic [differentiation](derivative) with respect to a named variable;
//! - the derived [transforms]: tangent lines, Taylor polynomials, and expression differences.
//!
//! The [operator table](op) is the single source of truth for the operator set: spellings,
//! precedences, numeric actions, derivative rules, and the presentation attributes used by the
//! [printers](fmt) all live in one module.
//!
//! ```
//! use deriv_engine::Expr;
//!
//! let expr = Expr::parse("sin(x) / x")?;
//! let derived = expr.differentiate("x")?;
//! assert_eq!(derived.to_string(), "(cos(x) * x - sin(x)) / (x ^ 2)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod derivative;
pub mod error;
pub mod eval;
pub mod expr;
pub mod fmt;
pub mod node;
pub mod op;
pub mod parser;
pub mod simplify;
pub mod tokenizer;
pub mod transforms;
pub mod vars;

pub use error::EngineError;
pub use expr::Expr;
pub use node::{Node, VarId};
pub use op::Op;
pub use vars::VarTable;
