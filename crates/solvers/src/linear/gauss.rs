//! Gaussian elimination with partial pivoting.
//!
//! # Algorithm
//!
//! The solver copies the [`AugmentedMatrix`] and, for each pivot column `i`:
//!
//! 1. picks the row at or below `i` with the largest `|a[k][i]|` and swaps it
//!    into place,
//! 2. fails with [`Error::Singular`] if the pivot magnitude is below
//!    [`PIVOT_TOLERANCE`],
//! 3. subtracts multiples of row `i` from every row below it, constants
//!    column included.
//!
//! Back substitution then resolves `x[n-1]` down to `x[0]`. Every swap,
//! elimination, and resolved variable is recorded as a [`Step`].
//!
//! The caller's matrix is never modified.

mod config;
mod error;
mod matrix;
mod solution;
mod step;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use matrix::{AugmentedMatrix, MatrixError};
pub use solution::Solution;
pub use step::Step;

use log::{debug, trace};

/// Pivot magnitudes below this are treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

/// Solves the system described by `matrix`.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSize`] if the system size is outside the
/// configured range, or [`Error::Singular`] if the system has no unique
/// solution.
pub fn solve(matrix: &AugmentedMatrix, config: &Config) -> Result<Solution, Error> {
    let n = matrix.size();
    if n < config.min_size() || n > config.max_size() {
        return Err(Error::UnsupportedSize {
            size: n,
            min: config.min_size(),
            max: config.max_size(),
        });
    }
    debug!("gaussian elimination on a {n}x{n} system");

    let mut rows = matrix.to_rows();
    let mut steps = vec![Step::Initial];

    for i in 0..n {
        let max_row = pivot_row(&rows, i);
        if max_row != i {
            rows.swap(i, max_row);
            trace!("swapped rows {i} and {max_row}");
            steps.push(Step::Swap {
                row: i,
                with: max_row,
            });
        }

        let pivot = rows[i][i];
        if pivot.abs() < PIVOT_TOLERANCE {
            debug!("zero pivot {pivot} in column {i}");
            return Err(Error::Singular { column: i, pivot });
        }

        for k in (i + 1)..n {
            let factor = rows[k][i] / pivot;
            trace!("row {k} -= {factor} * row {i}");
            steps.push(Step::Eliminate {
                target: k,
                pivot_row: i,
                factor,
            });
            for j in i..=n {
                let delta = factor * rows[i][j];
                rows[k][j] -= delta;
            }
        }
    }

    steps.push(Step::BackSubstitution);
    let mut solution = vec![0.0; n];
    for i in (0..n).rev() {
        let known: f64 = ((i + 1)..n).map(|j| rows[i][j] * solution[j]).sum();
        solution[i] = (rows[i][n] - known) / rows[i][i];
        steps.push(Step::Resolved {
            variable: i,
            value: solution[i],
        });
    }

    debug!("solved {n}x{n} system in {} steps", steps.len());
    Ok(Solution { solution, steps })
}

/// Solves the system with the default size limits.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_default(matrix: &AugmentedMatrix) -> Result<Solution, Error> {
    solve(matrix, &Config::default())
}

/// Returns the row at or below `col` with the largest magnitude in `col`.
///
/// Ties keep the earliest row.
fn pivot_row(rows: &[Vec<f64>], col: usize) -> usize {
    let mut best = col;
    for k in (col + 1)..rows.len() {
        if rows[k][col].abs() > rows[best][col].abs() {
            best = k;
        }
    }
    best
}
