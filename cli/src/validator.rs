use reedline::{ValidationResult, Validator};

use crate::lexer::calculate_depth;

/// Keeps reading lines while a `(` is still open.
pub struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            // Unknown characters go to the parser, which reports them.
            _ => ValidationResult::Complete,
        }
    }
}
