use crate::trace::Trace;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub enum Status {
    /// The error estimate fell below the tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root-finder run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct Solution<R> {
    /// Final solver status.
    pub status: Status,

    /// Root estimate from the last iteration.
    pub root: f64,

    /// Every iteration, in order.
    pub trace: Trace<R>,
}

impl<R> Solution<R> {
    /// Returns true if the run met the tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.trace.len()
    }
}
