use std::fmt;

use thiserror::Error;

/// A validated `n × (n+1)` augmented matrix `[A | b]`.
///
/// Each row holds `n` coefficients followed by one constant. All entries are
/// finite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
#[cfg_attr(feature = "serde-derive", serde(transparent))]
pub struct AugmentedMatrix {
    rows: Vec<Vec<f64>>,
}

/// Errors that can occur when building an augmented matrix.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MatrixError {
    #[error("matrix has no rows")]
    Empty,

    #[error("row {} has {len} entries, expected {expected}", .row + 1)]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("entry ({}, {}) is not finite: {value}", .row + 1, .col + 1)]
    NonFinite { row: usize, col: usize, value: f64 },
}

impl AugmentedMatrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, if any row does not hold exactly
    /// one entry more than there are rows, or if any entry is not finite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        if n == 0 {
            return Err(MatrixError::Empty);
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != n + 1 {
                return Err(MatrixError::Ragged {
                    row,
                    len: values.len(),
                    expected: n + 1,
                });
            }
            if let Some((col, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(MatrixError::NonFinite { row, col, value });
            }
        }

        Ok(Self { rows })
    }

    /// Returns an all-zero matrix for a system of `n` equations.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if `n` is zero.
    pub fn zeros(n: usize) -> Result<Self, MatrixError> {
        Self::new(vec![vec![0.0; n + 1]; n])
    }

    /// Returns a copy resized to `n` equations.
    ///
    /// Entries present in both sizes are kept, including the constants
    /// column; new entries are zero.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if `n` is zero.
    pub fn resized(&self, n: usize) -> Result<Self, MatrixError> {
        let old = self.size();
        let rows = (0..n)
            .map(|i| {
                let mut row = vec![0.0; n + 1];
                if let Some(src) = self.rows.get(i) {
                    for (j, value) in row.iter_mut().take(n.min(old)).enumerate() {
                        *value = src[j];
                    }
                    row[n] = src[old];
                }
                row
            })
            .collect();
        Self::new(rows)
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns row `i`, if present.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Returns the entry at row `i`, column `j`, if present.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    pub(super) fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows.clone()
    }
}

impl TryFrom<Vec<Vec<f64>>> for AugmentedMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl fmt::Display for AugmentedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for value in &row[..n] {
                write!(f, "{value:>10.4}")?;
            }
            write!(f, " |{:>10.4}", row[n])?;
        }
        Ok(())
    }
}
