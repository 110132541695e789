use log::trace;

use crate::{
    ast::{Assoc, BinaryOp, Function, Node, UNARY_PRECEDENCE, UnaryOp},
    error::ParseError,
    lexer::Lexer,
    token::{Span, Token, TokenKind},
};

/// Name of the single free variable.
const VARIABLE: &str = "x";

/// Deepest tree the parser will build.
///
/// Evaluation and printing recurse once per level, so this also bounds their
/// stack use.
pub const MAX_DEPTH: usize = 256;

/// Parses formula text into a tree.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text cannot be tokenized or does not form
/// a complete expression.
pub(crate) fn parse(source: &str) -> Result<Node, ParseError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    trace!("tokenized {source:?} into {} tokens", tokens.len());
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let root = parser.expression(0)?;

    match parser.peek() {
        None => Ok(root),
        Some(token) if token.kind == TokenKind::CParen => {
            Err(ParseError::UnmatchedCloseParen { span: token.span })
        }
        Some(token) => Err(unexpected(token)),
    }
}

/// Precedence-climbing parser over a token buffer.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Nesting levels open at the cursor plus operators chained in them.
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn prev(&self) -> Option<&Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Error for running out of tokens where an operand was required.
    fn end_error(&self) -> ParseError {
        ParseError::UnexpectedEnd {
            after: self
                .prev()
                .map(|token| token.lexeme.clone())
                .unwrap_or_default(),
        }
    }

    /// Returns the infix operator at the cursor and whether it is spelled out.
    ///
    /// Juxtaposition is read as `*` when an operand follows an operand:
    /// a name or `(` may follow anything, while a number may only follow `)`.
    /// That keeps `x2` an error instead of silently meaning `x*2`.
    fn infix(&self) -> Option<(BinaryOp, bool)> {
        let next = self.peek()?;
        match next.kind {
            TokenKind::Plus => Some((BinaryOp::Add, true)),
            TokenKind::Minus => Some((BinaryOp::Sub, true)),
            TokenKind::Star => Some((BinaryOp::Mul, true)),
            TokenKind::Slash => Some((BinaryOp::Div, true)),
            TokenKind::Caret => Some((BinaryOp::Pow, true)),
            TokenKind::Ident(_) | TokenKind::OParen => Some((BinaryOp::Mul, false)),
            TokenKind::Number(_) => self
                .prev()
                .is_some_and(|prev| prev.kind == TokenKind::CParen)
                .then_some((BinaryOp::Mul, false)),
            TokenKind::CParen => None,
        }
    }

    /// Counts one more level toward [`MAX_DEPTH`].
    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth <= MAX_DEPTH {
            return Ok(());
        }
        let span = self
            .peek()
            .or_else(|| self.prev())
            .map_or(Span::new(0, 0), |token| token.span);
        Err(ParseError::TooDeep {
            limit: MAX_DEPTH,
            span,
        })
    }

    fn expression(&mut self, min_prec: usize) -> Result<Node, ParseError> {
        let entry = self.depth;
        self.descend()?;
        let mut lhs = self.prefix()?;

        while let Some((op, explicit)) = self.infix() {
            let (prec, assoc) = op.precedence();
            if prec < min_prec {
                break;
            }
            self.descend()?;
            if explicit {
                self.advance();
            }
            let next_min = match assoc {
                Assoc::Left => prec + 1,
                Assoc::Right => prec,
            };
            let rhs = self.expression(next_min)?;
            lhs = Node::Binary(op, Box::new(lhs), Box::new(rhs));
        }

        self.depth = entry;
        Ok(lhs)
    }

    fn prefix(&mut self) -> Result<Node, ParseError> {
        let op = match self.peek().map(|token| &token.kind) {
            Some(TokenKind::Minus) => UnaryOp::Neg,
            Some(TokenKind::Plus) => UnaryOp::Plus,
            _ => return self.primary(),
        };
        self.advance();
        let operand = self.expression(UNARY_PRECEDENCE)?;
        Ok(Node::Unary(op, Box::new(operand)))
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let Some(token) = self.advance() else {
            return Err(self.end_error());
        };

        match token.kind {
            TokenKind::Number(value) => Ok(Node::Number(value)),
            TokenKind::Ident(ref name) => self.named(name, &token),
            TokenKind::OParen => {
                let inner = self.group_body()?;
                self.close(&token)?;
                Ok(inner)
            }
            _ => Err(unexpected(&token)),
        }
    }

    /// Resolves a name to the variable, a constant, or a function call.
    fn named(&mut self, name: &str, token: &Token) -> Result<Node, ParseError> {
        match name {
            VARIABLE => return Ok(Node::Variable),
            "pi" | "π" => return Ok(Node::Number(std::f64::consts::PI)),
            "e" => return Ok(Node::Number(std::f64::consts::E)),
            _ => {}
        }

        let Some(func) = Function::from_name(name) else {
            return Err(ParseError::UnknownIdentifier {
                name: name.to_string(),
                span: token.span,
            });
        };

        let open = match self.peek() {
            Some(next) if next.kind == TokenKind::OParen => next.clone(),
            _ => {
                return Err(ParseError::MissingCallParen {
                    name: name.to_string(),
                    span: token.span,
                });
            }
        };
        self.advance();
        let arg = self.group_body()?;
        self.close(&open)?;
        Ok(Node::Call(func, Box::new(arg)))
    }

    /// Parses what sits between `(` and `)`.
    fn group_body(&mut self) -> Result<Node, ParseError> {
        match self.peek() {
            Some(next) if next.kind == TokenKind::CParen => Err(unexpected(next)),
            _ => self.expression(0),
        }
    }

    /// Consumes the `)` that closes `open`.
    fn close(&mut self, open: &Token) -> Result<(), ParseError> {
        match self.peek() {
            Some(next) if next.kind == TokenKind::CParen => {
                self.advance();
                Ok(())
            }
            Some(next) => Err(unexpected(next)),
            None => Err(ParseError::UnmatchedOpenParen { span: open.span }),
        }
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        lexeme: token.lexeme.clone(),
        span: token.span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(source: &str) -> String {
        parse(source).expect("should parse").to_string()
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(shape("1 + 2 * 3"), "1 + 2 * 3");
        assert_eq!(shape("(1 + 2) * 3"), "(1 + 2) * 3");
        assert_eq!(shape("1 - 2 - 3"), "1 - 2 - 3");
        assert_eq!(shape("1 - (2 - 3)"), "1 - (2 - 3)");
        assert_eq!(shape("2^3^2"), "2 ^ 3 ^ 2");
        assert_eq!(shape("(2^3)^2"), "(2 ^ 3) ^ 2");
        assert_eq!(shape("-2^2"), "-2 ^ 2");
        assert_eq!(shape("(-2)^2"), "(-2) ^ 2");
        assert_eq!(shape("2^-1"), "2 ^ (-1)");
    }

    #[test]
    fn unary_minus_binds_tighter_than_product() {
        let tree = parse("-2*3").expect("should parse");
        assert!(matches!(tree, Node::Binary(BinaryOp::Mul, ref lhs, _)
            if matches!(**lhs, Node::Unary(UnaryOp::Neg, _))));
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(shape("2x"), "2 * x");
        assert_eq!(shape("2(x+1)"), "2 * (x + 1)");
        assert_eq!(shape("x(x+1)"), "x * (x + 1)");
        assert_eq!(shape("(x+1)x"), "(x + 1) * x");
        assert_eq!(shape("(x+1)2"), "(x + 1) * 2");
        assert_eq!(shape("(x+1)(x-1)"), "(x + 1) * (x - 1)");
        assert_eq!(shape("3sin(x)"), "3 * sin(x)");
        assert_eq!(shape("2x^2"), "2 * x ^ 2");
        assert_eq!(shape("1/2x"), "1 / 2 * x");
    }

    #[test]
    fn constants_fold_to_numbers() {
        assert_eq!(parse("pi").expect("pi"), Node::Number(std::f64::consts::PI));
        assert_eq!(parse("π").expect("pi"), Node::Number(std::f64::consts::PI));
        assert_eq!(parse("e").expect("e"), Node::Number(std::f64::consts::E));
    }

    #[test]
    fn reports_empty_input() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn reports_trailing_operator() {
        assert_eq!(
            parse("x^2 -"),
            Err(ParseError::UnexpectedEnd {
                after: "-".to_string()
            })
        );
        assert_eq!(
            parse("-"),
            Err(ParseError::UnexpectedEnd {
                after: "-".to_string()
            })
        );
    }

    #[test]
    fn reports_unmatched_parens() {
        assert_eq!(
            parse("(x + 1"),
            Err(ParseError::UnmatchedOpenParen {
                span: Span::new(0, 1)
            })
        );
        assert_eq!(
            parse("sin(x"),
            Err(ParseError::UnmatchedOpenParen {
                span: Span::new(3, 4)
            })
        );
        assert_eq!(
            parse("x + 1)"),
            Err(ParseError::UnmatchedCloseParen {
                span: Span::new(5, 6)
            })
        );
    }

    #[test]
    fn reports_unknown_names() {
        assert_eq!(
            parse("2 * y"),
            Err(ParseError::UnknownIdentifier {
                name: "y".to_string(),
                span: Span::new(4, 5)
            })
        );
        assert!(matches!(
            parse("sinh(x)"),
            Err(ParseError::UnknownIdentifier { ref name, .. }) if name == "sinh"
        ));
    }

    #[test]
    fn reports_function_without_call() {
        assert_eq!(
            parse("sin x"),
            Err(ParseError::MissingCallParen {
                name: "sin".to_string(),
                span: Span::new(0, 3)
            })
        );
    }

    #[test]
    fn reports_misplaced_tokens() {
        assert!(matches!(
            parse("x2"),
            Err(ParseError::UnexpectedToken { ref lexeme, .. }) if lexeme == "2"
        ));
        assert!(matches!(
            parse("2 3"),
            Err(ParseError::UnexpectedToken { ref lexeme, .. }) if lexeme == "3"
        ));
        assert!(matches!(
            parse("*x"),
            Err(ParseError::UnexpectedToken { ref lexeme, .. }) if lexeme == "*"
        ));
        assert!(matches!(
            parse("()"),
            Err(ParseError::UnexpectedToken { ref lexeme, .. }) if lexeme == ")"
        ));
        assert!(matches!(
            parse("(x+)"),
            Err(ParseError::UnexpectedToken { ref lexeme, .. }) if lexeme == ")"
        ));
    }

    #[test]
    fn rejects_runaway_nesting() {
        let depth = 10_000;
        let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));

        let err = parse(&source).unwrap_err();

        assert!(matches!(err, ParseError::TooDeep { limit: MAX_DEPTH, .. }));
        assert!(err.span().is_some_and(|span| span.start < MAX_DEPTH + 1));
    }

    #[test]
    fn rejects_runaway_chains() {
        let unary = format!("{}x", "-".repeat(10_000));
        assert!(matches!(parse(&unary), Err(ParseError::TooDeep { .. })));

        let powers = vec!["2"; 10_000].join("^");
        assert!(matches!(parse(&powers), Err(ParseError::TooDeep { .. })));

        let sums = vec!["x"; 10_000].join("+");
        assert!(matches!(parse(&sums), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn moderate_nesting_still_parses() {
        let depth = 100;
        let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(shape(&source), "x");

        let calls = format!("{}x{}", "abs(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse(&calls).expect("should parse").eval(-2.0), 2.0);

        let sums = vec!["x"; 100].join(" + ");
        assert_eq!(parse(&sums).expect("should parse").eval(1.0), 100.0);
    }
}
