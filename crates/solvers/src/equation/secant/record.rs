use crate::trace::IterationRecord;

/// State of one secant iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct Record {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Older of the two points.
    pub x0: f64,
    /// Newer of the two points.
    pub x1: f64,
    pub fx0: f64,
    pub fx1: f64,
    /// Zero of the secant line, the root estimate for this iteration.
    pub x2: f64,
    /// Step length, `|x2 - x1|`.
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
