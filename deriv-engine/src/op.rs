//! The operator table.
//!
//! [`Op`] enumerates every operator the engine understands, and this module is the single
//! authoritative description of the operator set: the lexer's keyword recognition, the
//! evaluator's numeric actions, the differentiator's per-operator rules, and the printers'
//! symbols and bracket hints are all exhaustive `match`es over [`Op`] living here. Adding an
//! operator means adding a variant and letting the compiler point at every `match` arm that
//! needs filling in — the correctness-critical code paths cannot drift out of sync.
//!
//! The brackets that appear in source text are not operators: they are [`TokenKind`] variants
//! that exist only while lexing and can never end up inside an expression tree.
//!
//! [`TokenKind`]: crate::tokenizer::TokenKind

use crate::error::EngineError;
use crate::node::{self, Node, VarId};
use std::f64::consts::FRAC_PI_2;

/// The number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand, stored in the node's `right` child.
    Unary,

    /// Two operands.
    Binary,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`), division (`/`), exponentiation (`^`), and the named
    /// functions, which separate factors.
    Factor,
}

/// How an operator's typeset symbol is placed relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypesetForm {
    /// The symbol goes between the operands (`a + b`).
    Infix,

    /// The symbol goes before the operands (`\frac{a}{b}`, `\sin(a)`).
    Prefix,
}

/// Whether an operand must be wrapped when typeset, and with which pair of brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brackets {
    /// The operand is always wrapped, regardless of precedence.
    pub required: bool,

    /// Wrap with `{` `}` instead of `(` `)`.
    pub curly: bool,
}

impl Brackets {
    const NONE: Brackets = Brackets { required: false, curly: false };
    const ROUND: Brackets = Brackets { required: true, curly: false };
    const CURLY: Brackets = Brackets { required: true, curly: true };
}

/// A closed enumeration of the operators understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Ln,
    Exp,
    Sin,
    Cos,
    Tan,
    Cot,
    Arcsin,
    Arccos,
    Arctan,
    Arccot,
}

impl Op {
    /// Every operator, in table order.
    pub const ALL: [Op; 15] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Pow,
        Op::Ln,
        Op::Exp,
        Op::Sin,
        Op::Cos,
        Op::Tan,
        Op::Cot,
        Op::Arcsin,
        Op::Arccos,
        Op::Arctan,
        Op::Arccot,
    ];

    /// The spelling of the operator in input text.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
            Op::Ln => "ln",
            Op::Exp => "exp",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Tan => "tg",
            Op::Cot => "ctg",
            Op::Arcsin => "arcsin",
            Op::Arccos => "arccos",
            Op::Arctan => "arctg",
            Op::Arccot => "arcctg",
        }
    }

    /// Looks up an operator by its input spelling. This is how the lexer decides whether an
    /// identifier is a named function or a variable.
    pub fn from_symbol(symbol: &str) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn arity(self) -> Arity {
        match self {
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pow => Arity::Binary,
            Op::Ln
            | Op::Exp
            | Op::Sin
            | Op::Cos
            | Op::Tan
            | Op::Cot
            | Op::Arcsin
            | Op::Arccos
            | Op::Arctan
            | Op::Arccot => Arity::Unary,
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Op::Add | Op::Sub => Precedence::Term,
            _ => Precedence::Factor,
        }
    }

    /// The numeric action of the operator. Unary operators read only `right`.
    ///
    /// Division by zero, logarithms of non-positive values and the like produce the usual IEEE
    /// non-finite results rather than errors.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Op::Add => left + right,
            Op::Sub => left - right,
            Op::Mul => left * right,
            Op::Div => left / right,
            Op::Pow => left.powf(right),
            Op::Ln => right.ln(),
            Op::Exp => right.exp(),
            Op::Sin => right.sin(),
            Op::Cos => right.cos(),
            Op::Tan => right.tan(),
            Op::Cot => 1.0 / right.tan(),
            Op::Arcsin => right.asin(),
            Op::Arccos => right.acos(),
            Op::Arctan => right.atan(),
            Op::Arccot => FRAC_PI_2 - right.atan(),
        }
    }

    /// The spelling of the operator in expressions handed to the plotting tool.
    pub fn plot_symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "**",
            Op::Ln => "log",
            Op::Exp => "exp",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Tan => "tan",
            Op::Cot => "1/tan",
            Op::Arcsin => "asin",
            Op::Arccos => "acos",
            Op::Arctan => "atan",
            Op::Arccot => "pi/2 - atan",
        }
    }

    /// The typeset symbol of the operator.
    pub fn typeset_symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "\\cdot",
            Op::Div => "\\frac",
            Op::Pow => "^",
            Op::Ln => "\\ln",
            Op::Exp => "\\exp",
            Op::Sin => "\\sin",
            Op::Cos => "\\cos",
            Op::Tan => "\\tan",
            Op::Cot => "\\cot",
            Op::Arcsin => "\\arcsin",
            Op::Arccos => "\\arccos",
            Op::Arctan => "\\arctan",
            Op::Arccot => "\\arccot",
        }
    }

    pub fn typeset_form(self) -> TypesetForm {
        match self {
            Op::Add | Op::Sub | Op::Mul | Op::Pow => TypesetForm::Infix,
            _ => TypesetForm::Prefix,
        }
    }

    /// Bracket hints for the typeset form: `(left, right)`.
    pub fn typeset_brackets(self) -> (Brackets, Brackets) {
        match self {
            Op::Add | Op::Sub | Op::Mul => (Brackets::NONE, Brackets::NONE),
            Op::Div => (Brackets::CURLY, Brackets::CURLY),
            Op::Pow => (Brackets::NONE, Brackets::CURLY),
            // the unary functions wrap their single operand, which sits on the right
            _ => (Brackets::NONE, Brackets::ROUND),
        }
    }

    /// The derivative rule of the operator.
    ///
    /// `node` is the operator node being differentiated, `var` the slot of the differentiation
    /// variable, and `d` the recursion callback that differentiates a child. Rules combine deep
    /// copies of the original children (via [`Node::clone`]) with recursive `d` calls through the
    /// construction DSL in [`node`]; the input is never modified.
    pub(crate) fn derivative(
        self,
        node: &Node,
        var: VarId,
        d: &dyn Fn(&Node) -> Result<Node, EngineError>,
    ) -> Result<Node, EngineError> {
        match self {
            Op::Add => {
                let (l, r) = binary_children(node)?;
                Ok(node::add(d(l)?, d(r)?))
            }
            Op::Sub => {
                let (l, r) = binary_children(node)?;
                Ok(node::sub(d(l)?, d(r)?))
            }
            Op::Mul => {
                let (l, r) = binary_children(node)?;
                Ok(node::add(
                    node::mul(d(l)?, r.clone()),
                    node::mul(l.clone(), d(r)?),
                ))
            }
            Op::Div => {
                let (l, r) = binary_children(node)?;
                Ok(node::div(
                    node::sub(node::mul(d(l)?, r.clone()), node::mul(l.clone(), d(r)?)),
                    node::pow(r.clone(), node::num(2.0)),
                ))
            }
            Op::Pow => {
                let (base, expo) = binary_children(node)?;
                let var_in_base = base.contains_var(var);
                let var_in_expo = expo.contains_var(var);

                if var_in_base && var_in_expo {
                    // logarithmic derivative: (f^g)' = (g' ln f + g f'/f) f^g
                    Ok(node::mul(
                        node::add(
                            node::mul(d(expo)?, node::ln(base.clone())),
                            node::mul(expo.clone(), node::div(d(base)?, base.clone())),
                        ),
                        node.clone(),
                    ))
                } else if var_in_base {
                    // power rule: (f^c)' = f' c f^(c-1)
                    Ok(node::mul(
                        d(base)?,
                        node::mul(
                            expo.clone(),
                            node::pow(base.clone(), node::sub(expo.clone(), node::num(1.0))),
                        ),
                    ))
                } else if var_in_expo {
                    // exponential rule: (c^g)' = g' ln(c) c^g
                    Ok(node::mul(
                        d(expo)?,
                        node::mul(node::ln(base.clone()), node.clone()),
                    ))
                } else {
                    Ok(node::num(0.0))
                }
            }
            Op::Ln => {
                let arg = unary_child(node)?;
                Ok(node::mul(d(arg)?, node::div(node::num(1.0), arg.clone())))
            }
            Op::Exp => {
                let arg = unary_child(node)?;
                Ok(node::mul(d(arg)?, node.clone()))
            }
            Op::Sin => {
                let arg = unary_child(node)?;
                Ok(node::mul(d(arg)?, node::cos(arg.clone())))
            }
            Op::Cos => {
                let arg = unary_child(node)?;
                Ok(node::mul(
                    node::num(-1.0),
                    node::mul(d(arg)?, node::sin(arg.clone())),
                ))
            }
            Op::Tan => {
                let arg = unary_child(node)?;
                Ok(node::mul(
                    d(arg)?,
                    node::div(
                        node::num(1.0),
                        node::pow(node::cos(arg.clone()), node::num(2.0)),
                    ),
                ))
            }
            Op::Cot => {
                let arg = unary_child(node)?;
                Ok(node::mul(
                    node::num(-1.0),
                    node::mul(
                        d(arg)?,
                        node::div(
                            node::num(1.0),
                            node::pow(node::sin(arg.clone()), node::num(2.0)),
                        ),
                    ),
                ))
            }
            Op::Arcsin => {
                let arg = unary_child(node)?;
                Ok(node::mul(d(arg)?, recip_sqrt_one_minus_square(arg)))
            }
            Op::Arccos => {
                let arg = unary_child(node)?;
                Ok(node::mul(
                    node::num(-1.0),
                    node::mul(d(arg)?, recip_sqrt_one_minus_square(arg)),
                ))
            }
            Op::Arctan => {
                let arg = unary_child(node)?;
                Ok(node::div(d(arg)?, one_plus_square(arg)))
            }
            Op::Arccot => {
                let arg = unary_child(node)?;
                Ok(node::mul(
                    node::num(-1.0),
                    node::div(d(arg)?, one_plus_square(arg)),
                ))
            }
        }
    }
}

/// `(1 - x^2)^(-1/2)`, the shared core of the arcsine and arccosine rules.
fn recip_sqrt_one_minus_square(arg: &Node) -> Node {
    node::pow(
        node::sub(node::num(1.0), node::pow(arg.clone(), node::num(2.0))),
        node::num(-0.5),
    )
}

/// `1 + x^2`, the shared core of the arctangent and arccotangent rules.
fn one_plus_square(arg: &Node) -> Node {
    node::add(node::num(1.0), node::pow(arg.clone(), node::num(2.0)))
}

/// Extracts both children of a binary operator node, failing on malformed trees.
fn binary_children(node: &Node) -> Result<(&Node, &Node), EngineError> {
    match node {
        Node::Op { left: Some(left), right, .. } => Ok((left.as_ref(), right.as_ref())),
        _ => Err(EngineError::InvalidExpressionFormat),
    }
}

/// Extracts the single operand of a unary operator node, failing on malformed trees.
fn unary_child(node: &Node) -> Result<&Node, EngineError> {
    match node {
        Node::Op { left: None, right, .. } => Ok(right.as_ref()),
        _ => Err(EngineError::InvalidExpressionFormat),
    }
}
