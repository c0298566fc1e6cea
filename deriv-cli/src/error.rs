//! Utility enum packaging everything that can go wrong while driving the engine, with the
//! process exit code each failure maps to.

use ariadne::Source;
use deriv_engine::parser::error::Error as ParseError;
use deriv_engine::EngineError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An input file contained no expression.
    #[error("`{path}` contains no expression")]
    NoExpression { path: String },

    /// An expression failed to parse; the original input text is kept for the report.
    #[error("{source}")]
    Parse {
        source: ParseError,
        input: String,
    },

    /// An input file was readable but did not follow the expected line layout.
    #[error("`{path}` is malformed: {reason}")]
    MalformedInput { path: String, reason: String },

    /// An error from the engine itself.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// An input or output file could not be opened.
    #[error("cannot open `{path}`: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The user declined to provide a missing argument.
    #[error("quitting at the user's request")]
    UserQuit,
}

impl Error {
    /// Report the error to stderr. Parse errors render a full source-annotated report;
    /// everything else is a one-liner.
    pub fn report_to_stderr(&self) {
        match self {
            Error::Parse { source, input } => {
                let report = source.build_report();
                let _ = report.eprint(("input", Source::from(input.as_str())));
            }
            other => eprintln!("error: {other}"),
        }
    }

    /// The process exit code for this error. Each kind gets its own code so callers can tell
    /// them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoExpression { .. } => 2,
            Error::Parse { .. } | Error::MalformedInput { .. } => 3,
            Error::Engine(EngineError::InvalidExpressionFormat) => 6,
            Error::Engine(EngineError::NoDiffVariable { .. }) => 8,
            Error::Engine(_) => 3,
            Error::UserQuit => 9,
            Error::OpenFile { .. } => 10,
            Error::Io(_) => 11,
        }
    }
}
