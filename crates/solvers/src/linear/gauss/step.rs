use std::fmt;

/// One entry of the elimination step log.
///
/// Indices are 0-based; the rendered text numbers rows and variables from 1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-derive", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Step {
    /// The working copy of the augmented matrix was created.
    Initial,

    /// Row `row` was exchanged with the pivot candidate `with`.
    Swap { row: usize, with: usize },

    /// `factor` times `pivot_row` was subtracted from `target`.
    Eliminate {
        target: usize,
        pivot_row: usize,
        factor: f64,
    },

    /// Elimination finished.
    BackSubstitution,

    /// Variable `variable` was resolved to `value`.
    Resolved { variable: usize, value: f64 },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Initial => f.write_str("Initial augmented matrix created"),
            Self::Swap { row, with } => write!(
                f,
                "Swapped row {} with row {} for better numerical stability",
                row + 1,
                with + 1
            ),
            Self::Eliminate {
                target,
                pivot_row,
                factor,
            } => write!(
                f,
                "Row {t} = Row {t} - ({factor:.4}) × Row {p}",
                t = target + 1,
                p = pivot_row + 1
            ),
            Self::BackSubstitution => f.write_str("Starting back substitution"),
            Self::Resolved { variable, value } => {
                write!(f, "x{} = {value:.6}", variable + 1)
            }
        }
    }
}
