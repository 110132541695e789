use thiserror::Error;

use crate::token::Span;

/// Errors produced while turning formula text into an [`Expression`].
///
/// Each variant names the offending text when there is any, and its span
/// locates it within the formula.
///
/// [`Expression`]: crate::Expression
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at column {}", .span.column())]
    UnexpectedChar { ch: char, span: Span },

    #[error("invalid number '{lexeme}' at column {}", .span.column())]
    InvalidNumber { lexeme: String, span: Span },

    #[error("unknown identifier '{name}' at column {}", .span.column())]
    UnknownIdentifier { name: String, span: Span },

    #[error("function '{name}' at column {} must be followed by '('", .span.column())]
    MissingCallParen { name: String, span: Span },

    #[error("unmatched '(' at column {}", .span.column())]
    UnmatchedOpenParen { span: Span },

    #[error("unmatched ')' at column {}", .span.column())]
    UnmatchedCloseParen { span: Span },

    #[error("unexpected '{lexeme}' at column {}", .span.column())]
    UnexpectedToken { lexeme: String, span: Span },

    #[error("unexpected end of expression after '{after}'")]
    UnexpectedEnd { after: String },

    #[error("expression nests deeper than {limit} levels at column {}", .span.column())]
    TooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// Returns where in the formula the error was detected, if known.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Empty | ParseError::UnexpectedEnd { .. } => None,
            ParseError::UnexpectedChar { span, .. }
            | ParseError::InvalidNumber { span, .. }
            | ParseError::UnknownIdentifier { span, .. }
            | ParseError::MissingCallParen { span, .. }
            | ParseError::UnmatchedOpenParen { span }
            | ParseError::UnmatchedCloseParen { span }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::TooDeep { span, .. } => Some(*span),
        }
    }
}

/// A successfully parsed expression produced a non-finite value.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalError {
    #[error("expression is not finite at x = {x}: {value}")]
    NonFinite { x: f64, value: f64 },
}
