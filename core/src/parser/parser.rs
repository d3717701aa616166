use bumpalo::Bump;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;
use tracing::trace;

use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::syntax::{Form, Operator, Span, SyntaxNode};

#[derive(Parser)]
#[grammar = "parser/lispy.pest"]
pub struct LispyParser;

/// Parse a whole input line into a syntax tree allocated in `arena`.
///
/// The returned root is always a [`SyntaxNode::Program`].
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<&'a SyntaxNode<'a>, ParseError> {
    let mut pairs =
        LispyParser::parse(Rule::lispy, source).map_err(|e| convert_pest_error(e, source))?;
    let Some(program) = pairs.next() else {
        return Err(structure_error(source, Span::new(0, source.len()), "empty parse result"));
    };

    let builder = TreeBuilder { arena, source };
    let span = Span::from(program.as_span());
    let form = builder.build_form(program.into_inner(), span)?;
    Ok(arena.alloc(SyntaxNode::Program(form)))
}

struct TreeBuilder<'a> {
    arena: &'a Bump,
    source: &'a str,
}

impl<'a> TreeBuilder<'a> {
    /// Build the node for one `expr` pair.
    fn build_expr(&self, pair: Pair<'a, Rule>) -> Result<SyntaxNode<'a>, ParseError> {
        let span = Span::from(pair.as_span());
        let mut inner = pair.into_inner();

        match inner.peek() {
            Some(first) if first.as_rule() == Rule::number => {
                trace!(text = first.as_str(), "number literal");
                Ok(SyntaxNode::Number(first.as_str()))
            }
            Some(_) => Ok(SyntaxNode::Expression(self.build_form(inner, span)?)),
            None => Err(structure_error(self.source, span, "empty expression")),
        }
    }

    /// Build a form from `operator expr+`, ignoring the trailing `EOI` of the
    /// top-level rule.
    fn build_form(&self, mut pairs: Pairs<'a, Rule>, span: Span) -> Result<Form<'a>, ParseError> {
        let operator = match pairs.next() {
            Some(pair) if pair.as_rule() == Rule::operator => Operator(pair.as_str()),
            _ => return Err(structure_error(self.source, span, "missing operator")),
        };

        let operands = pairs
            .filter(|pair| pair.as_rule() == Rule::expr)
            .map(|pair| self.build_expr(pair))
            .collect::<Result<Vec<_>, _>>()?;
        let operands = self.arena.alloc_slice_copy(&operands);

        Form::new(operator, operands)
            .ok_or_else(|| structure_error(self.source, span, "missing operand"))
    }
}

fn structure_error(source: &str, span: Span, message: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: message.to_string(),
        },
        source.to_string(),
        span,
    )
}
