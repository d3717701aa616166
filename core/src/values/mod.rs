//! Runtime values produced by the evaluator.

mod value;

pub use value::{ErrorKind, Value};
