use thiserror::Error;

/// Configuration shared by the root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a root finder config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    /// At most 100 iterations with a tolerance of `1e-4`.
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-4,
        }
    }
}

impl Config {
    /// Creates a new config with a validated iteration cap and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or the tolerance is negative
    /// or non-finite.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the error threshold below which an estimate is accepted.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
