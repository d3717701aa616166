//! Lispy - prefix integer arithmetic in S-expression form
//!
//! # Overview
//!
//! Lispy evaluates a single line such as `+ 1 (* 2 3)`: an operator followed
//! by one or more operands, each an integer or a parenthesized form. Every
//! line is parsed, measured and evaluated in isolation.
//!
//! # Quick Start
//!
//! ```
//! use lispy::{interpret, Value};
//!
//! let outcome = interpret("+ 1 (* 2 3)").unwrap();
//! assert_eq!(outcome.leaves, 6);
//! assert_eq!(outcome.value, Value::Number(7));
//! ```
//!
//! # Errors
//!
//! Arithmetic faults are values, not `Err`s:
//!
//! ```
//! use lispy::{interpret, ErrorKind, Value};
//!
//! let outcome = interpret("/ 10 0").unwrap();
//! assert_eq!(outcome.value, Value::Error(ErrorKind::DivisionByZero));
//! assert_eq!(outcome.value.to_string(), "Error: Division by zero.");
//! ```
//!
//! Input the grammar rejects comes back as [`Error`], which
//! [`render_error`] prints with source snippets.

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from lispy_core
pub use lispy_core::api::{Diagnostic, Error, Outcome, Severity, interpret};

// Re-export the tree, evaluator and values
pub use lispy_core::diagnostics::count_leaves;
pub use lispy_core::evaluator::{apply_operator, evaluate};
pub use lispy_core::parser::{self, Category, Form, Operator, SyntaxNode};
pub use lispy_core::values::{ErrorKind, Value};
