use core::fmt;

use thiserror::Error;

/// Classification of an evaluation fault.
///
/// Faults are ordinary values: they are created where the problem is
/// detected and carried unchanged through every enclosing fold.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `/` or `%` with a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,

    /// An operator symbol outside `+ - * / % ^`.
    #[error("Invalid operator.")]
    InvalidOperator,

    /// A number literal that does not fit in an `i64`.
    #[error("Invalid number.")]
    InvalidNumber,

    /// `^` with a negative exponent.
    #[error("Invalid exponent.")]
    InvalidExponent,
}

/// Result of evaluating a node: either a number or an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Number(i64),
    Error(ErrorKind),
}

impl Value {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<ErrorKind> {
        match self {
            Value::Number(_) => None,
            Value::Error(kind) => Some(*kind),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<ErrorKind> for Value {
    fn from(kind: ErrorKind) -> Self {
        Value::Error(kind)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(kind) => write!(f, "Error: {}", kind),
        }
    }
}
