//! Bisection on a bracketing interval.
//!
//! # Algorithm
//!
//! Given `[a, b]` where `f(a)` and `f(b)` have opposite signs, each iteration
//! evaluates the midpoint `c`, records `{a, b, c, f(c), |b - a| / 2}`, and
//! keeps the half whose endpoints still differ in sign. The run converges once
//! the recorded error drops below the tolerance; the root is the last `c`.
//!
//! # Failure modes
//!
//! - Endpoints with the same sign fail with [`Error::NoSignChange`] before any
//!   iteration runs.
//! - A non-finite function value fails with [`Error::NonFiniteValue`] rather
//!   than steering the bracket with a meaningless sign. A midpoint record is
//!   checked against the tolerance first, then offered to the observer, so
//!   both convergence and an early stop take precedence over this failure.
//! - Running out of iterations is not an error: the solution comes back with
//!   [`Status::MaxIters`] and the full trace.

mod bracket;
mod error;
mod record;


pub use bracket::BracketError;
pub use error::Error;
pub use record::Record;

use log::{debug, trace};
use numkit_core::{Model, Observer};

use crate::trace::Trace;

use super::{Action, Config, Solution, Status, call};

use bracket::Interval;

/// Finds a root of `model` inside `bracket` using bisection.
///
/// The observer sees each [`Record`] as soon as it is appended to the trace.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, does not bracket a sign
/// change, the function is not finite at a visited point, or the model fails.
pub fn solve<M, Obs>(
    model: &M,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Record>, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: Observer<Record, Action>,
{
    let [a, b] = bracket::ordered(bracket)?;

    let fa = call(model, a).map_err(Error::Model)?;
    if !fa.is_finite() {
        return Err(Error::non_finite(a, fa, Trace::new()));
    }
    let fb = call(model, b).map_err(Error::Model)?;
    if !fb.is_finite() {
        return Err(Error::non_finite(b, fb, Trace::new()));
    }

    let mut interval =
        Interval::new([a, b], fa, fb).ok_or(Error::NoSignChange { a, b, fa, fb })?;
    debug!(
        "bisection on [{a}, {b}], tolerance {}, at most {} iterations",
        config.tolerance(),
        config.max_iters()
    );

    let mut records = Trace::new();
    for iter in 1..=config.max_iters() {
        let [a, b] = interval.ends();
        let c = interval.midpoint();
        let fc = call(model, c).map_err(Error::Model)?;
        let error = interval.half_width();

        let record = Record {
            iter,
            a,
            b,
            c,
            fc,
            error,
        };
        trace!("bisection {record:?}");
        let action = observer.observe(&record);
        records.push(record);

        if error < config.tolerance() {
            debug!("bisection converged to {c} after {iter} iterations");
            return Ok(Solution {
                status: Status::Converged,
                root: c,
                trace: records,
            });
        }

        if let Some(Action::StopEarly) = action {
            debug!("bisection stopped by observer after {iter} iterations");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root: c,
                trace: records,
            });
        }

        if !fc.is_finite() {
            return Err(Error::non_finite(c, fc, records));
        }

        interval.keep_half(c, fc);
    }

    let root = records.last().map_or_else(|| interval.midpoint(), |last| last.c);
    debug!(
        "bisection reached {} iterations without converging",
        config.max_iters()
    );
    Ok(Solution {
        status: Status::MaxIters,
        root,
        trace: records,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, does not bracket a sign
/// change, the function is not finite at a visited point, or the model fails.
pub fn solve_unobserved<M>(
    model: &M,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<Record>, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve(model, bracket, config, ())
}
