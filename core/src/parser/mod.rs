pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use parser::LispyParser;
pub use parser::Rule;
pub use parser::parse;

pub use error::{ParseError, ParseErrorKind};
pub use syntax::{Category, Form, Operator, Span, SyntaxNode};


#[cfg(test)]
mod rule_valid_test;
