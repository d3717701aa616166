//! Core of the Lispy interpreter: grammar, syntax tree, evaluator and the
//! error-as-value model.
//!
//! Every input line goes through [`api::interpret`], which parses into an
//! arena owned by that call, counts leaves, evaluates and drops the arena.

pub mod api;
pub mod diagnostics;
pub mod evaluator;
pub mod parser;
pub mod values;
