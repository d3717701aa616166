//! Tree-walking evaluator for Lispy syntax trees.
//!
//! The evaluator reduces a [`SyntaxNode`](crate::parser::SyntaxNode) to a
//! [`Value`](crate::values::Value). Faults are values too: there is no
//! `Result` here, an `Error` value simply flows up through every enclosing
//! fold.
//!
//! ## Semantics
//!
//! - A form folds its operands strictly left to right with its operator.
//! - A form with a single operand evaluates to that operand.
//! - Recursion depth follows input nesting; there is no explicit limit.
//!
//! ## Example
//!
//! ```
//! use lispy_core::{evaluator::evaluate, parser, values::Value};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let tree = parser::parse(&arena, "+ 1 (* 2 3)").unwrap();
//! assert_eq!(evaluate(tree), Value::Number(7));
//! ```

mod eval;
mod operators;


pub use eval::{apply_operator, evaluate};
pub use operators::BinaryOp;
