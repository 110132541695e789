use thiserror::Error;

/// Size limits for the Gaussian elimination solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    min_size: usize,
    max_size: usize,
}

/// Errors that can occur when validating a Gaussian elimination config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_size must be at least 1")]
    MinSize,

    #[error("max_size {max} is below min_size {min}")]
    Range { min: usize, max: usize },
}

impl Default for Config {
    /// Systems of 2 to 10 equations.
    fn default() -> Self {
        Self {
            min_size: 2,
            max_size: 10,
        }
    }
}

impl Config {
    /// Creates a config accepting systems of `min_size..=max_size` equations.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_size` is zero or exceeds `max_size`.
    pub fn new(min_size: usize, max_size: usize) -> Result<Self, ConfigError> {
        if min_size == 0 {
            return Err(ConfigError::MinSize);
        }
        if max_size < min_size {
            return Err(ConfigError::Range {
                min: min_size,
                max: max_size,
            });
        }

        Ok(Self { min_size, max_size })
    }

    /// Returns the smallest accepted system size.
    #[must_use]
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the largest accepted system size.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
