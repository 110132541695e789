//! Secant method from two starting points.
//!
//! # Algorithm
//!
//! Each iteration draws the line through `(x0, f(x0))` and `(x1, f(x1))` and
//! takes its zero as the next estimate:
//!
//! ```text
//! x2 = x1 - f(x1) (x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! The error estimate is `|x2 - x1|`. The run converges once it drops below
//! the tolerance; otherwise the points shift (`x0 <- x1`, `x1 <- x2`).
//!
//! No bracket is required and convergence is superlinear near a simple root,
//! but nothing keeps the iterates close to the starting points.
//!
//! # Failure modes
//!
//! - [`Error::Degenerate`] when `|f(x1) - f(x0)|` falls below
//!   [`DEGENERATE_SLOPE`], since the next step would divide by almost zero.
//! - [`Error::NonFiniteValue`] when `f` is not finite at an iterate.
//!
//! Both keep the iterations completed so far. Running out of iterations is
//! reported as [`Status::MaxIters`].

mod error;
mod record;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use record::Record;

use log::{debug, trace};
use numkit_core::{Model, Observer};

use crate::trace::Trace;

use super::{Action, Config, Solution, Status, call};

/// Smallest `|f(x1) - f(x0)|` the secant step accepts.
pub const DEGENERATE_SLOPE: f64 = 1e-10;

/// Finds a root of `model` starting from `points = [x0, x1]`.
///
/// The observer sees each [`Record`] as soon as it is appended to the trace.
///
/// # Errors
///
/// Returns an error if a starting point is not finite, the secant becomes
/// degenerate, the function is not finite at an iterate, or the model fails.
pub fn solve<M, Obs>(
    model: &M,
    points: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Record>, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: Observer<Record, Action>,
{
    let [mut x0, mut x1] = points;
    for value in points {
        if !value.is_finite() {
            return Err(Error::NonFinitePoint { value });
        }
    }
    debug!(
        "secant from x0 = {x0}, x1 = {x1}, tolerance {}, at most {} iterations",
        config.tolerance(),
        config.max_iters()
    );

    let mut records = Trace::new();
    for iter in 1..=config.max_iters() {
        let fx0 = call(model, x0).map_err(Error::Model)?;
        if !fx0.is_finite() {
            return Err(Error::non_finite(x0, fx0, records));
        }
        let fx1 = call(model, x1).map_err(Error::Model)?;
        if !fx1.is_finite() {
            return Err(Error::non_finite(x1, fx1, records));
        }

        let slope = fx1 - fx0;
        if slope.abs() < DEGENERATE_SLOPE {
            debug!("secant degenerate at iteration {iter}: f(x1) - f(x0) = {slope}");
            return Err(Error::Degenerate {
                iter,
                x0,
                x1,
                fx0,
                fx1,
                trace: records,
            });
        }

        let x2 = x1 - fx1 * (x1 - x0) / slope;
        let error = (x2 - x1).abs();

        let record = Record {
            iter,
            x0,
            x1,
            fx0,
            fx1,
            x2,
            error,
        };
        trace!("secant {record:?}");
        let action = observer.observe(&record);
        records.push(record);

        if error < config.tolerance() {
            debug!("secant converged to {x2} after {iter} iterations");
            return Ok(Solution {
                status: Status::Converged,
                root: x2,
                trace: records,
            });
        }

        if let Some(Action::StopEarly) = action {
            debug!("secant stopped by observer after {iter} iterations");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root: x2,
                trace: records,
            });
        }

        x0 = x1;
        x1 = x2;
    }

    debug!(
        "secant reached {} iterations without converging",
        config.max_iters()
    );
    Ok(Solution {
        status: Status::MaxIters,
        root: x1,
        trace: records,
    })
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error if a starting point is not finite, the secant becomes
/// degenerate, the function is not finite at an iterate, or the model fails.
pub fn solve_unobserved<M>(
    model: &M,
    points: [f64; 2],
    config: &Config,
) -> Result<Solution<Record>, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve(model, points, config, ())
}
