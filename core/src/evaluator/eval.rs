//! Core evaluation logic.

use tracing::{debug, trace};

use crate::{
    evaluator::operators::{BinaryOp, eval_binary_int},
    parser::{Form, SyntaxNode},
    values::{ErrorKind, Value},
};

/// Reduce a syntax tree node to a value.
///
/// Every operand of a form is evaluated, even after an earlier operand
/// faulted; only the fold skips arithmetic once an error is in hand.
pub fn evaluate(node: &SyntaxNode<'_>) -> Value {
    match node {
        SyntaxNode::Number(text) => parse_number(text),
        SyntaxNode::Expression(form) | SyntaxNode::Program(form) => evaluate_form(form),
    }
}

fn evaluate_form(form: &Form<'_>) -> Value {
    let op = form.operator.symbol();
    let (first, rest) = form.split_first();
    debug!(op, operands = form.operands().len(), "evaluating form");

    let mut acc = evaluate(first);
    for operand in rest {
        let next = evaluate(operand);
        acc = apply_operator(acc, op, next);
    }
    acc
}

/// Combine two values with the operator named by `op`.
///
/// An error on the left wins over one on the right, and either wins over an
/// unknown operator.
pub fn apply_operator(x: Value, op: &str, y: Value) -> Value {
    let (x, y) = match (x, y) {
        (Value::Error(_), _) => return x,
        (_, Value::Error(_)) => return y,
        (Value::Number(x), Value::Number(y)) => (x, y),
    };

    let Some(op) = BinaryOp::from_symbol(op) else {
        trace!(op, "unknown operator");
        return Value::Error(ErrorKind::InvalidOperator);
    };

    let result = eval_binary_int(op, x, y);
    trace!(x, op = op.symbol(), y, %result, "fold step");
    result
}

/// Parse a number literal as written by the grammar: optional sign, digits,
/// then an optional `.` and fractional digit which are discarded.
fn parse_number(text: &str) -> Value {
    let integer_part = match text.split_once('.') {
        Some((integer_part, _fraction)) => integer_part,
        None => text,
    };

    match integer_part.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(e) => {
            debug!(text, error = %e, "invalid number literal");
            Value::Error(ErrorKind::InvalidNumber)
        }
    }
}
