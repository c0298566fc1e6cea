//! Typeset math for the report.
//!
//! Small trees print straight into a `multline` block. Past a depth threshold a raw printout
//! stops fitting on a page, so the renderer prints only the top levels of the tree, replacing
//! each subtree hanging below the cutoff with a capital-letter alias like `A_{2}`, and then
//! emits one definition line per alias — recursively, so arbitrarily deep trees unfold into a
//! readable chain of equations. The subscript is the nesting order of the definition chain.

use crate::expr::Expr;
use crate::fmt::{needs_brackets, Side};
use crate::node::Node;
use crate::op::{Brackets, Op, TypesetForm};
use crate::vars::VarTable;
use std::fmt::Write;

/// Subtrees deeper than this are renamed instead of printed whole.
pub const MAX_OUTPUT_TREE_DEPTH: usize = 6;

/// How many levels of a renamed tree are printed before aliases take over.
const RENAME_PRINT_DEPTH: usize = 3;

/// Equation lines per page; the `multline` block is restarted when a page fills up.
pub const MAX_LINES_ON_PAGE: usize = 25;

/// The letter naming the first alias of a renamed tree.
const FIRST_ALIAS: u8 = b'A';

/// Aliased subtrees collected while printing the top of a renamed tree.
struct Aliases<'a> {
    subtrees: Vec<&'a Node>,
    order: usize,
}

/// Renders expressions as typeset math, tracking page fill across equations of one report
/// section.
#[derive(Debug, Default)]
pub struct LatexRenderer {
    lines: usize,
}

impl LatexRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the expression as inline math, without any subtree renaming.
    pub fn inline(expr: &Expr) -> String {
        let mut out = String::from("$");
        write_nodes(&mut out, expr.root(), expr.vars(), 1, None);
        out.push('$');
        out
    }

    /// Renders the expression as a display equation, renaming subtrees that are too deep for
    /// one page.
    pub fn equation(&mut self, expr: &Expr) -> String {
        self.lines = 0;
        let mut out = String::new();
        out.push_str("\n\\begin{multline}\n\\\\\n");
        self.emit(&mut out, expr.root(), expr.vars(), 1);
        out.push_str("\\end{multline}\n\n");
        out
    }

    fn emit(&mut self, out: &mut String, node: &Node, vars: &VarTable, order: usize) {
        if node.depth() > MAX_OUTPUT_TREE_DEPTH {
            let mut aliases = Aliases { subtrees: Vec::new(), order };
            write_nodes(out, node, vars, 1, Some(&mut aliases));
            self.end_line(out);

            let mut next_order = order + 1;
            for (index, subtree) in aliases.subtrees.iter().enumerate() {
                // writing into a String cannot fail
                let _ = write!(out, "{}_{{{}}} = ", alias_letter(index), order);
                self.emit(out, subtree, vars, next_order);
                next_order += 1;
            }
        } else {
            write_nodes(out, node, vars, 1, None);
            self.end_line(out);
        }
    }

    /// Closes an equation line, starting a fresh `multline` block when the page is full.
    fn end_line(&mut self, out: &mut String) {
        out.push_str(".\\\\\n");
        self.lines += 1;

        if self.lines >= MAX_LINES_ON_PAGE {
            out.push_str("\\end{multline}\n\\begin{multline}\n\\\\\n");
            self.lines = 0;
        }
    }
}

fn alias_letter(index: usize) -> char {
    (FIRST_ALIAS + index as u8) as char
}

fn write_nodes<'a>(
    out: &mut String,
    node: &'a Node,
    vars: &VarTable,
    depth: usize,
    mut aliases: Option<&mut Aliases<'a>>,
) {
    match node {
        Node::Num(value) => {
            // writing into a String cannot fail
            let _ = write!(out, "{value}");
            return;
        }
        Node::Var(id) => {
            out.push_str(vars.name(*id));
            return;
        }
        Node::Op { .. } => {}
    }

    if let Some(state) = aliases.as_deref_mut() {
        if depth >= RENAME_PRINT_DEPTH {
            let _ = write!(out, "{}_{{{}}}", alias_letter(state.subtrees.len()), state.order);
            state.subtrees.push(node);
            return;
        }
    }

    let Node::Op { op, left, right } = node else {
        return;
    };

    let (left_hint, right_hint) = op.typeset_brackets();

    match (left, op.typeset_form()) {
        (Some(left), TypesetForm::Prefix) => {
            out.push_str(op.typeset_symbol());
            bracketed(out, left, vars, depth, aliases.as_deref_mut(), *op, Side::Left, left_hint);
            bracketed(out, right, vars, depth, aliases, *op, Side::Right, right_hint);
        }
        (Some(left), TypesetForm::Infix) => {
            bracketed(out, left, vars, depth, aliases.as_deref_mut(), *op, Side::Left, left_hint);
            let _ = write!(out, " {} ", op.typeset_symbol());
            bracketed(out, right, vars, depth, aliases, *op, Side::Right, right_hint);
        }
        (None, _) => {
            out.push_str(op.typeset_symbol());
            bracketed(out, right, vars, depth, aliases, *op, Side::Right, right_hint);
        }
    }
}

/// Writes one operand, bracketed when the table requires it or precedence does.
#[allow(clippy::too_many_arguments)]
fn bracketed<'a>(
    out: &mut String,
    node: &'a Node,
    vars: &VarTable,
    depth: usize,
    aliases: Option<&mut Aliases<'a>>,
    parent: Op,
    side: Side,
    hint: Brackets,
) {
    let wrap = hint.required || needs_brackets(node, parent, side);
    let (open, close) = if hint.curly { ('{', '}') } else { ('(', ')') };

    if wrap {
        out.push(open);
    }
    write_nodes(out, node, vars, depth + 1, aliases);
    if wrap {
        out.push(close);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn inline(input: &str) -> String {
        LatexRenderer::inline(&Expr::parse(input).unwrap())
    }

    #[test]
    fn division_typesets_as_a_fraction() {
        assert_eq!(inline("sin(x) / x"), "$\\frac{\\sin(x)}{x}$");
    }

    #[test]
    fn powers_wrap_the_exponent_in_curly_braces() {
        assert_eq!(inline("x ^ 2"), "$x ^ {2}$");
        assert_eq!(inline("(x + 1) ^ 2"), "$(x + 1) ^ {2}$");
    }

    #[test]
    fn multiplication_uses_cdot() {
        assert_eq!(inline("2 * x"), "$2 \\cdot x$");
    }

    #[test]
    fn functions_are_prefix_with_round_brackets() {
        assert_eq!(inline("ctg(x + 1)"), "$\\cot(x + 1)$");
        assert_eq!(inline("arcsin(x)"), "$\\arcsin(x)$");
    }

    #[test]
    fn shallow_equations_do_not_rename() {
        let mut renderer = LatexRenderer::new();
        let out = renderer.equation(&Expr::parse("x + 1").unwrap());
        assert!(out.starts_with("\n\\begin{multline}"));
        assert!(out.contains("x + 1.\\\\\n"));
        assert!(!out.contains("A_{"));
    }

    #[test]
    fn deep_equations_rename_subtrees() {
        // nine nested sines: depth 10 forces renaming
        let input = "sin(sin(sin(sin(sin(sin(sin(sin(sin(x)))))))))";
        let mut renderer = LatexRenderer::new();
        let out = renderer.equation(&Expr::parse(input).unwrap());

        assert!(out.contains("A_{1}"), "no alias in: {out}");
        assert!(out.contains("A_{1} = "), "no alias definition in: {out}");
    }

    #[test]
    fn definitions_chain_for_very_deep_trees() {
        let mut input = String::from("x");
        for _ in 0..12 {
            input = format!("sin({input})");
        }
        let mut renderer = LatexRenderer::new();
        let out = renderer.equation(&Expr::parse(&input).unwrap());

        // the first alias definition is itself deep enough to need a second alias
        assert!(out.contains("A_{1} = "));
        assert!(out.contains("A_{2} = "));
    }
}
