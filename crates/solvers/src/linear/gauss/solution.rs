use super::Step;

/// The result of a Gaussian elimination run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct Solution {
    /// Value of each variable, `solution[i]` being `x{i+1}`.
    pub solution: Vec<f64>,

    /// Every step taken, in order.
    pub steps: Vec<Step>,
}

impl Solution {
    /// Renders the steps as human-readable lines.
    #[must_use]
    pub fn step_log(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}
