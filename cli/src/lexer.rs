use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // Same shape as the grammar's `number` rule.
    #[regex(r"-?[0-9]+\.?[0-9]?")]
    Number,

    #[regex(r"[+\-*/%^]")]
    Operator,
}

/// Bracket depth at the end of `buffer`, or `None` if it contains a
/// character the language does not know.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) => depth -= 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    if depth < 0 {
        Some(0)
    } else {
        Some(depth as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        let tokens: Vec<_> = Token::lexer("+ -1 (* 2.5 3)")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Operator,
                Token::Number,
                Token::LParen,
                Token::Operator,
                Token::Number,
                Token::Number,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_depth() {
        assert_eq!(calculate_depth("+ 1 2"), Some(0));
        assert_eq!(calculate_depth("+ 1 (* 2"), Some(1));
        assert_eq!(calculate_depth("+ (- (* 2"), Some(2));
        assert_eq!(calculate_depth("+ 1 (* 2 3))"), Some(0));
    }

    #[test]
    fn test_unknown_character_aborts() {
        assert_eq!(calculate_depth("+ 1 (& 2"), None);
        assert_eq!(calculate_depth("x"), None);
    }
}
