use thiserror::Error;

/// Errors that can occur during Gaussian elimination.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("system size {size} is outside the supported range {min}..={max}")]
    UnsupportedSize { size: usize, min: usize, max: usize },

    #[error("matrix is singular: pivot {pivot:e} in column {column}")]
    Singular { column: usize, pivot: f64 },
}
