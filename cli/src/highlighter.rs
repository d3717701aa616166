use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

use crate::lexer::Token;

const PLAIN: Color = Color::White;

fn token_color(token: &Result<Token, ()>) -> Color {
    match token {
        Ok(Token::Number) => Color::Cyan,
        Ok(Token::Operator) => Color::Magenta,
        Ok(Token::LParen) | Ok(Token::RParen) => Color::DarkGray,
        Err(()) => Color::Red,
    }
}

/// Colors numbers, operators and brackets; anything the lexer rejects is red.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut output = StyledText::new();
        let mut curr_end = 0;

        for (token, span) in Token::lexer(line).spanned() {
            // Skipped whitespace between tokens.
            if span.start > curr_end {
                output.push((Style::new().fg(PLAIN), line[curr_end..span.start].to_string()));
            }
            let style = Style::new().fg(token_color(&token));
            output.push((style, line[span.clone()].to_string()));
            curr_end = span.end;
        }

        if curr_end < line.len() {
            output.push((Style::new().fg(PLAIN), line[curr_end..].to_string()));
        }

        output
    }
}
