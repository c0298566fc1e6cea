//! The typeset report.
//!
//! Every expression handed to [`Report::step`] is preceded by a phrase from a fixed table of
//! stock commentary, chosen through the seedable random source the report is constructed with —
//! the writer has no global state, so two reports built with the same seed come out identical.

use deriv_engine::fmt::latex::LatexRenderer;
use deriv_engine::Expr;
use rand::rngs::StdRng;
use rand::Rng;
use std::io::{self, Write};

/// Stock commentary printed before rewritten expressions.
const PHRASES: [&str; 12] = [
    "After elementary simplifications, it is obvious that this is equal to",
    "Any first-year student can see at a glance that this is",
    "ARE YOU SURPRISED???? It is clear to the hedgehog that this is the same as",
    "Let's not bother with the obvious proof that this is",
    "I would justify this transition, but the article will be more useful if you do it yourself",
    "At that very lecture you missed, it was proved that this is equal to",
    "A fitness trainer from Simferopol threatens to beat the author unless we continue the transformation",
    "This explanation is available only to premium readers of this article",
    "The reviewers insisted on this simplification",
    "Are you really still reading this?",
    "Some guy from the neighbouring dorm told me that this is equal to",
    "Looks impressive. Still, we must make another transformation",
];

/// Writes the report as a LaTeX document.
pub struct Report<W: Write> {
    out: W,
    rng: StdRng,
    latex: LatexRenderer,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, rng: StdRng) -> Self {
        Self {
            out,
            rng,
            latex: LatexRenderer::new(),
        }
    }

    /// The document preamble, up to and including the table of contents.
    pub fn preamble(&mut self) -> io::Result<()> {
        writeln!(self.out, "\\documentclass[12pt,a4paper]{{extreport}}")?;
        writeln!(self.out, "\\usepackage{{amssymb,amsmath,amsthm}}")?;
        writeln!(self.out, "\\usepackage{{graphicx}}")?;
        writeln!(self.out, "\\title{{<<Differential calculus for the impatient>>}}")?;
        writeln!(self.out, "\\begin{{document}}")?;
        writeln!(self.out, "\\maketitle")?;
        writeln!(self.out, "\\tableofcontents")
    }

    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out, "\\end{{document}}")?;
        self.out.flush()
    }

    pub fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "\\section{{{title}}}")
    }

    pub fn paragraph(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}\\\\")
    }

    /// One rewriting step: a stock phrase followed by the expression as a display equation.
    pub fn step(&mut self, expr: &Expr) -> io::Result<()> {
        let phrase = PHRASES[self.rng.gen_range(0..PHRASES.len())];
        writeln!(self.out, "{phrase}")?;
        write!(self.out, "{}", self.latex.equation(expr))
    }

    /// Includes a rendered plot image.
    pub fn image(&mut self, file_name: &str) -> io::Result<()> {
        writeln!(self.out, "\\begin{{figure}}[h]")?;
        writeln!(self.out, "\\centering")?;
        writeln!(
            self.out,
            "\\includegraphics[width=0.8\\textwidth]{{{file_name}}}"
        )?;
        writeln!(self.out, "\\end{{figure}}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use super::*;

    fn build(seed: u64) -> String {
        let mut buffer = Vec::new();
        let mut report = Report::new(&mut buffer, StdRng::seed_from_u64(seed));
        report.preamble().unwrap();
        report.section("Getting superhard tangent").unwrap();
        report.step(&Expr::parse("x ^ 2 + 1").unwrap()).unwrap();
        report.finish().unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn same_seed_same_report() {
        assert_eq!(build(7), build(7));
    }

    #[test]
    fn report_is_a_complete_document() {
        let text = build(0);
        assert!(text.starts_with("\\documentclass"));
        assert!(text.contains("\\section{Getting superhard tangent}"));
        assert!(text.contains("x ^ {2} + 1"));
        assert!(text.trim_end().ends_with("\\end{document}"));
    }
}
