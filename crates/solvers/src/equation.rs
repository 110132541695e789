//! Root finders for a scalar function `f(x)` of one variable.
//!
//! The function is any [`Model`] with `f64` input and output, typically a
//! parsed formula. Solvers call it repeatedly and record every iteration in a
//! [`Trace`](crate::Trace).
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracketing interval
//! - [`secant`] — superlinear convergence from two starting points, no
//!   bracket required
//!
//! # Outcomes
//!
//! A solve returns `Ok(Solution)` when it produced a root estimate. Check
//! [`Solution::status`] to tell convergence apart from running out of
//! iterations ([`Status::MaxIters`]), which still carries the full trace.
//! Failures that stop a run part-way keep the records gathered so far.
//!
//! [`Model`]: numkit_core::Model

mod config;
mod solution;

pub mod bisection;
pub mod secant;

pub use config::{Config, ConfigError};
pub use solution::{Solution, Status};

use std::error::Error as StdError;

use numkit_core::Model;

/// Control actions supported by the root finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the latest estimate.
    StopEarly,
}

/// Calls `f(x)`, boxing any model failure.
fn call<M>(model: &M, x: f64) -> Result<f64, Box<dyn StdError + Send + Sync>>
where
    M: Model<Input = f64, Output = f64>,
{
    model.call(&x).map_err(|err| Box::new(err) as Box<dyn StdError + Send + Sync>)
}
