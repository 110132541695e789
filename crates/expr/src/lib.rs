//! Parsing and evaluation of single-variable math formulas.
//!
//! A formula such as `x^3 - 2x + sin(pi x)` is parsed once into an
//! [`Expression`], which can then be evaluated at any number of points.
//! Expressions implement [`numkit_core::Model`], so they plug directly into
//! the root finders.
//!
//! # Grammar
//!
//! From loosest to tightest binding:
//!
//! - `+` and `-` (left-associative)
//! - `*`, `/`, and implicit multiplication (left-associative)
//! - unary `-` and `+`
//! - `^` (right-associative, so `2^3^2 = 2^9`)
//!
//! Operands are numbers (`2`, `.5`, `1e-3`), the variable `x`, the constants
//! `pi` (or `π`) and `e`, parenthesized groups, and calls to
//! `sin cos tan log ln sqrt exp abs`. `log` is base 10 and `ln` is natural.
//!
//! Juxtaposition multiplies: `2x`, `3(x+1)`, `(x+1)(x-1)`, `(x)2`, `x(x+1)`,
//! `2pi`, `3sin(x)`.
//!
//! Trees deeper than [`MAX_DEPTH`] levels, whether from nested groups and
//! calls or from long operator chains, are rejected with
//! [`ParseError::TooDeep`].
//!
//! # Non-finite values
//!
//! Evaluation never fails. Division by zero and out-of-domain function
//! arguments (`sqrt(-1)`, `ln(0)`) produce infinities or NaN, which callers
//! can detect with [`Expression::try_eval`].

mod ast;
mod error;
mod expression;
mod lexer;
mod parser;
mod token;

pub use ast::{BinaryOp, Function, Node, UnaryOp};
pub use error::{EvalError, ParseError};
pub use expression::Expression;
pub use lexer::Lexer;
pub use parser::MAX_DEPTH;
pub use token::{Span, Token, TokenKind};

/// Tokens offered by formula-entry front ends, in palette order.
///
/// Each entry is inserted verbatim into the formula text, so every one of them
/// is accepted by [`Expression::parse`] once completed.
pub const TOKEN_VOCABULARY: [&str; 13] = [
    "sin(", "cos(", "tan(", "log(", "ln(", "sqrt(", "exp(", "abs(", "^", "π", "e", "(", ")",
];
