//! Public error types for the Lispy API.
//!
//! Evaluation faults are values (see [`Value`](crate::values::Value)); the
//! only failure that escapes [`interpret`](super::interpret) is input the
//! grammar rejects.

use core::fmt;

use thiserror::Error;

use crate::parser::Span;

/// Public error type for all Lispy operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input did not match the grammar.
    ///
    /// Carries the offending source and one or more diagnostics.
    #[error("Parse failed with {} error(s)", .diagnostics.len())]
    Parse {
        src: String,
        diagnostics: Vec<Diagnostic>,
    },
}

impl Error {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Parse { diagnostics, .. } => diagnostics,
        }
    }

    pub fn src(&self) -> &str {
        match self {
            Error::Parse { src, .. } => src,
        }
    }
}

impl From<crate::parser::ParseError> for Error {
    fn from(err: crate::parser::ParseError) -> Self {
        let diagnostic = err.to_diagnostic();
        Error::Parse {
            src: err.source,
            diagnostics: vec![diagnostic],
        }
    }
}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
