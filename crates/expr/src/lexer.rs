use crate::{
    error::ParseError,
    token::{Span, Token, TokenKind},
};

/// Splits formula text into tokens.
///
/// The lexer yields `Err` at the first character it cannot use and then
/// stops; whitespace between tokens is skipped.
pub struct Lexer {
    src: Vec<char>,
    pos: usize,
    failed: bool,
}

impl Lexer {
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            src: source.chars().collect(),
            pos: 0,
            failed: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.src.get(self.pos + offset).copied()
    }

    fn text(&self, start: usize) -> String {
        self.src[start..self.pos].iter().collect()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Scans digits and dots, then an exponent if one follows.
    ///
    /// An `e` only starts an exponent when a digit (optionally signed) comes
    /// right after it, so `2e` lexes as `2` followed by the constant `e`.
    fn scan_number(&mut self, start: usize) -> Result<Token, ParseError> {
        let mut dots = 0;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {}
                '.' => dots += 1,
                _ => break,
            }
            self.pos += 1;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let digit_at = match self.peek_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                self.pos += digit_at;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.pos += 1;
                }
            }
        }

        let lexeme = self.text(start);
        let span = Span::new(start, self.pos);
        let has_digit = lexeme.chars().any(|c| c.is_ascii_digit());
        if dots > 1 || !has_digit {
            return Err(ParseError::InvalidNumber { lexeme, span });
        }
        match lexeme.parse::<f64>() {
            Ok(value) => Ok(Token {
                kind: TokenKind::Number(value),
                span,
                lexeme,
            }),
            Err(_) => Err(ParseError::InvalidNumber { lexeme, span }),
        }
    }

    fn scan_ident(&mut self, start: usize) -> Token {
        // `π` is a name on its own so `2π` and `πx` split naturally.
        if self.peek() == Some('π') {
            self.pos += 1;
        } else {
            while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
                self.pos += 1;
            }
        }
        let lexeme = self.text(start);
        Token {
            kind: TokenKind::Ident(lexeme.clone()),
            span: Span::new(start, self.pos),
            lexeme,
        }
    }

    fn get_token(&mut self) -> Option<Result<Token, ParseError>> {
        self.skip_ws();
        let start = self.pos;
        let c = self.peek()?;

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::OParen,
            ')' => TokenKind::CParen,
            '0'..='9' | '.' => return Some(self.scan_number(start)),
            'π' => return Some(Ok(self.scan_ident(start))),
            c if c.is_ascii_alphabetic() => return Some(Ok(self.scan_ident(start))),
            other => {
                self.pos += 1;
                return Some(Err(ParseError::UnexpectedChar {
                    ch: other,
                    span: Span::new(start, self.pos),
                }));
            }
        };

        self.pos += 1;
        Some(Ok(Token {
            kind,
            span: Span::new(start, self.pos),
            lexeme: c.to_string(),
        }))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let token = self.get_token();
        if matches!(token, Some(Err(_))) {
            self.failed = true;
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .map(|token| token.expect("valid token").kind)
            .collect()
    }

    fn ident(name: &str) -> TokenKind {
        TokenKind::Ident(name.to_string())
    }

    #[test]
    fn basic_ops() {
        assert_eq!(
            kinds("3+4*2/-(1-5)^2^3"),
            vec![
                TokenKind::Number(3.0),
                TokenKind::Plus,
                TokenKind::Number(4.0),
                TokenKind::Star,
                TokenKind::Number(2.0),
                TokenKind::Slash,
                TokenKind::Minus,
                TokenKind::OParen,
                TokenKind::Number(1.0),
                TokenKind::Minus,
                TokenKind::Number(5.0),
                TokenKind::CParen,
                TokenKind::Caret,
                TokenKind::Number(2.0),
                TokenKind::Caret,
                TokenKind::Number(3.0),
            ]
        );
    }

    #[test]
    fn functions_and_variables() {
        assert_eq!(
            kinds("3.4e-2 * sin(x) / ln(2x)"),
            vec![
                TokenKind::Number(3.4e-2),
                TokenKind::Star,
                ident("sin"),
                TokenKind::OParen,
                ident("x"),
                TokenKind::CParen,
                TokenKind::Slash,
                ident("ln"),
                TokenKind::OParen,
                TokenKind::Number(2.0),
                ident("x"),
                TokenKind::CParen,
            ]
        );
    }

    #[test]
    fn e_without_digits_is_a_name() {
        assert_eq!(kinds("2e"), vec![TokenKind::Number(2.0), ident("e")]);
        assert_eq!(
            kinds("2e-x"),
            vec![
                TokenKind::Number(2.0),
                ident("e"),
                TokenKind::Minus,
                ident("x")
            ]
        );
        assert_eq!(kinds("2E+3"), vec![TokenKind::Number(2000.0)]);
    }

    #[test]
    fn pi_symbol_splits_from_neighbours() {
        assert_eq!(
            kinds("2πx"),
            vec![TokenKind::Number(2.0), ident("π"), ident("x")]
        );
    }

    #[test]
    fn leading_and_trailing_dots() {
        assert_eq!(kinds(".5 + 2."), vec![
            TokenKind::Number(0.5),
            TokenKind::Plus,
            TokenKind::Number(2.0),
        ]);
    }

    #[test]
    fn spans_count_chars() {
        let tokens: Vec<Token> = Lexer::new("π + xx")
            .collect::<Result<_, _>>()
            .expect("valid tokens");
        assert_eq!(tokens[0].span, Span::new(0, 1));
        assert_eq!(tokens[1].span, Span::new(2, 3));
        assert_eq!(tokens[2].span, Span::new(4, 6));
        assert_eq!(tokens[2].lexeme, "xx");
    }

    #[test]
    fn rejects_malformed_numbers() {
        let err = Lexer::new("1.2.3").next().expect("token").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { ref lexeme, .. } if lexeme == "1.2.3"));

        let err = Lexer::new(".").next().expect("token").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn stops_after_unexpected_char() {
        let mut lexer = Lexer::new("x $ 2");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        let err = lexer.next().expect("error").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedChar { ch: '$', span } if span == Span::new(2, 3)
        ));
        assert!(lexer.next().is_none());
    }
}
