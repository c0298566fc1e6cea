//! Contains the common [`ErrorKind`] trait used by all parsing and evaluation errors to display
//! user-facing error messages.

use ariadne::{Color, Label, Report, ReportKind};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// Implementors describe themselves through [`message`](ErrorKind::message),
/// [`label`](ErrorKind::label), and [`help`](ErrorKind::help); the provided
/// [`build_report`](ErrorKind::build_report) assembles those pieces into a finished report
/// pointing at the offending span of the source expression.
pub trait ErrorKind: Debug + Send {
    /// The headline message of the error.
    fn message(&self) -> String;

    /// The message attached to the label that highlights the offending span.
    fn label(&self) -> String;

    /// An optional help message suggesting how to fix the error.
    fn help(&self) -> Option<String> {
        None
    }

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.message())
            .with_label(
                Label::new((src_id, span))
                    .with_message(self.label())
                    .with_color(EXPR),
            );

        if let Some(help) = self.help() {
            builder = builder.with_help(help);
        }

        builder.finish()
    }
}
