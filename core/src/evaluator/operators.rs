//! Integer operator implementations.

use crate::values::{ErrorKind, Value};

/// The operators the evaluator understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinaryOp {
    /// Exact symbol match; anything else is not an operator.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "%" => Some(BinaryOp::Rem),
            "^" => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "^",
        }
    }
}

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division or remainder by zero returns an error value.
pub(super) fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Value {
    match op {
        BinaryOp::Add => Value::Number(left.wrapping_add(right)),
        BinaryOp::Sub => Value::Number(left.wrapping_sub(right)),
        BinaryOp::Mul => Value::Number(left.wrapping_mul(right)),
        BinaryOp::Div | BinaryOp::Rem if right == 0 => Value::Error(ErrorKind::DivisionByZero),
        // wrapping_* handles i64::MIN / -1
        BinaryOp::Div => Value::Number(left.wrapping_div(right)),
        BinaryOp::Rem => Value::Number(left.wrapping_rem(right)),
        BinaryOp::Pow => power(left, right),
    }
}

/// Raise `base` to a non-negative `exponent` by repeated squaring.
///
/// `x^0` is 1 for every `x`, including 0. Negative exponents have no integer
/// result and yield `InvalidExponent`.
pub(super) fn power(base: i64, exponent: i64) -> Value {
    if exponent < 0 {
        return Value::Error(ErrorKind::InvalidExponent);
    }

    let mut result: i64 = 1;
    let mut base = base;
    let mut exponent = exponent as u64;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }
    Value::Number(result)
}
