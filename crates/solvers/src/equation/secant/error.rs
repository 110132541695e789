use std::error::Error as StdError;

use thiserror::Error;

use crate::trace::Trace;

use super::Record;

/// Errors that can occur during secant solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("starting point is not finite: {value}")]
    NonFinitePoint { value: f64 },

    #[error(
        "secant is degenerate at iteration {iter}: f({x0}) = {fx0} and f({x1}) = {fx1} are too close"
    )]
    Degenerate {
        iter: usize,
        x0: f64,
        x1: f64,
        fx0: f64,
        fx1: f64,
        trace: Trace<Record>,
    },

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
            Self::Degenerate { trace, .. } | Self::NonFiniteValue { trace, .. } => Some(trace),
            _ => None,
        }
    }
}
