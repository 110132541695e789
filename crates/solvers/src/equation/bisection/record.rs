use crate::trace::IterationRecord;

/// State of one bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct Record {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Left end of the bracket at the start of the iteration.
    pub a: f64,
    /// Right end of the bracket at the start of the iteration.
    pub b: f64,
    /// Midpoint, the root estimate for this iteration.
    pub c: f64,
    /// Function value at `c`.
    pub fc: f64,
    /// Half the bracket width, `|b - a| / 2`.
    pub error: f64,
}

impl IterationRecord for Record {
    fn iter(&self) -> usize {
        self.iter
    }

    fn error(&self) -> f64 {
        self.error
    }
}
