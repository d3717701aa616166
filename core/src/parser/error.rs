use crate::api::{Diagnostic, Severity};
use crate::parser::{Rule, Span};

/// Parser error with the source it was raised against.
#[derive(Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken { expected: String, found: String },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: String, span: Span) -> Self {
        Self { kind, source, span }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => (
                format!("Expected {}, found {}", expected, found),
                "P001",
                expected_help(expected),
            ),
            ParseErrorKind::Other { message } => (message.clone(), "P999", None),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            span: self.span.clone(),
            help,
            code: Some(code.to_string()),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(f, "{}: {}", diagnostic.severity, diagnostic.message)?;

        if let Some(ref code) = diagnostic.code {
            write!(f, " [{}]", code)?;
        }

        if let Some(ref help) = diagnostic.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}

fn expected_help(expected: &str) -> Option<String> {
    if expected.contains("operator") {
        Some("Forms start with one of + - * / % ^, e.g. `+ 1 2`".to_string())
    } else if expected.contains("expression") {
        Some("Operands are integers or parenthesized forms like `(* 2 3)`".to_string())
    } else {
        None
    }
}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: format_found(source, span.0.start, &negatives),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source.to_string(), span)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "something else".to_string();
    }

    let mut concepts = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::number | Rule::expr => "expression",
            Rule::operator => "operator",
            Rule::EOI => "end of input",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
        None => "something else".to_string(),
    }
}

/// Describe what sits at the error position. Pest rarely reports negative
/// rules for this grammar, so fall back to the offending character.
fn format_found(source: &str, pos: usize, rules: &[Rule]) -> String {
    if let Some(rule) = rules.first() {
        return match rule {
            Rule::number => "number".to_string(),
            Rule::operator => "operator".to_string(),
            Rule::expr => "expression".to_string(),
            Rule::EOI => "end of input".to_string(),
            _ => format!("{:?}", rule),
        };
    }

    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LispyParser;
    use pest::Parser;

    #[test]
    fn test_parse_error_to_diagnostic() {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: "operator".to_string(),
                found: "'&'".to_string(),
            },
            "& 1 2".to_string(),
            Span(0..0),
        );

        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.message, "Expected operator, found '&'");
        assert_eq!(diagnostic.code, Some("P001".to_string()));
        assert!(diagnostic.help.is_some());
    }

    #[test]
    fn test_format_expected_rules() {
        assert_eq!(format_expected_rules(&[Rule::number, Rule::expr]), "expression");
        assert_eq!(
            format_expected_rules(&[Rule::expr, Rule::EOI]),
            "expression or end of input"
        );
        assert_eq!(format_expected_rules(&[]), "something else");
    }

    #[test]
    fn test_unknown_operator_is_reported_at_offending_char() {
        let source = "& 1 2";
        let err = LispyParser::parse(Rule::lispy, source).unwrap_err();
        let parse_err = convert_pest_error(err, source);

        assert_eq!(parse_err.span, Span(0..0));
        match parse_err.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                assert_eq!(expected, "operator");
                assert_eq!(found, "'&'");
            }
            other => panic!("Expected UnexpectedToken, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_operand_reports_end_of_input() {
        let source = "+";
        let err = LispyParser::parse(Rule::lispy, source).unwrap_err();
        let parse_err = convert_pest_error(err, source);

        match parse_err.kind {
            ParseErrorKind::UnexpectedToken { found, .. } => {
                assert_eq!(found, "end of input");
            }
            other => panic!("Expected UnexpectedToken, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_error_becomes_other() {
        let pest_err = pest::error::Error::<Rule>::new_from_pos(
            pest::error::ErrorVariant::CustomError {
                message: "missing operator".to_string(),
            },
            pest::Position::from_start("()"),
        );

        let parse_err = convert_pest_error(pest_err, "()");
        assert!(matches!(
            parse_err.kind,
            ParseErrorKind::Other { ref message } if message == "missing operator"
        ));
        assert_eq!(parse_err.to_diagnostic().code, Some("P999".to_string()));
    }

    #[test]
    fn test_display_includes_code_and_help() {
        let source = "+ 1 )";
        let err = LispyParser::parse(Rule::lispy, source).unwrap_err();
        let rendered = convert_pest_error(err, source).to_string();
        assert!(rendered.starts_with("error: Expected"), "{}", rendered);
        assert!(rendered.contains("[P001]"), "{}", rendered);
    }
}
