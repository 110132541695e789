use std::error::Error as StdError;

use thiserror::Error;

use crate::trace::Trace;

use super::{BracketError, Record};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("no sign change in bracket: f({a}) = {fa}, f({b}) = {fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("non-finite function value {value} at x = {x}")]
    NonFiniteValue {
        x: f64,
        value: f64,
        trace: Trace<Record>,
    },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(super) fn non_finite(x: f64, value: f64, trace: Trace<Record>) -> Self {
        Self::NonFiniteValue { x, value, trace }
    }

    /// Returns the iterations completed before the failure, if any were kept.
    #[must_use]
    pub fn trace(&self) -> Option<&Trace<Record>> {
        match self {
            Self::NonFiniteValue { trace, .. } => Some(trace),
            _ => None,
        }
    }
}
