use std::{convert::Infallible, fmt, str::FromStr};

use numkit_core::Model;

use crate::{
    ast::Node,
    error::{EvalError, ParseError},
    parser,
};

/// A parsed formula in the single variable `x`.
///
/// Parsing happens once, in [`Expression::parse`]; evaluation walks the
/// resulting tree and has no side effects, so the same expression can be
/// evaluated at many points or shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    /// Parses formula text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the offending text if the formula
    /// contains an unknown character or name, unbalanced parentheses, or is
    /// otherwise incomplete.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let root = parser::parse(source)?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// Evaluates the expression at `x`.
    ///
    /// The result may be NaN or infinite; see [`Expression::try_eval`].
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// Evaluates the expression at `x`, rejecting non-finite results.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::NonFinite`] if the value is NaN or infinite.
    pub fn try_eval(&self, x: f64) -> Result<f64, EvalError> {
        let value = self.eval(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite { x, value })
        }
    }

    /// Returns the text the expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the parsed tree.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Model for Expression {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok(self.eval(*input))
    }
}
