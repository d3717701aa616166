//! Public API: run one input line through the whole pipeline.

mod error;

pub use error::{Diagnostic, Error, Severity};

use bumpalo::Bump;
use tracing::debug;

use crate::{diagnostics::count_leaves, evaluator::evaluate, parser, values::Value};

/// What one input line produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub leaves: u64,
    pub value: Value,
}

/// Parse, count leaves and evaluate `source`.
///
/// The syntax tree lives in an arena local to this call and is released
/// before returning, so nothing carries over between calls. Evaluation
/// faults are reported in [`Outcome::value`]; only parse failures are `Err`.
///
/// ```
/// use lispy_core::{api::interpret, values::Value};
///
/// let outcome = interpret("+ 1 (* 2 3)").unwrap();
/// assert_eq!(outcome.leaves, 6);
/// assert_eq!(outcome.value, Value::Number(7));
/// ```
pub fn interpret(source: &str) -> Result<Outcome, Error> {
    let arena = Bump::new();
    let tree = parser::parse(&arena, source)?;

    let leaves = count_leaves(tree);
    let value = evaluate(tree);
    debug!(leaves, %value, "interpreted line");

    Ok(Outcome { leaves, value })
}
