//! Plain-text rendering of solver results.

use std::fmt;

use numkit_solvers::{
    IterationRecord, Trace,
    equation::{Solution, Status, bisection, secant},
    linear::gauss,
};

const WIDTH: usize = 14;

/// Table columns a record contributes after its iteration number.
pub trait Columns: IterationRecord {
    const HEADERS: &'static [&'static str];

    fn values(&self) -> Vec<f64>;
}

impl Columns for bisection::Record {
    const HEADERS: &'static [&'static str] = &["a", "b", "c", "f(c)", "Error"];

    fn values(&self) -> Vec<f64> {
        vec![self.a, self.b, self.c, self.fc, self.error]
    }
}

impl Columns for secant::Record {
    const HEADERS: &'static [&'static str] = &["x0", "x1", "f(x0)", "f(x1)", "x2", "Error"];

    fn values(&self) -> Vec<f64> {
        vec![self.x0, self.x1, self.fx0, self.fx1, self.x2, self.error]
    }
}

/// Iteration table with one line per record.
pub struct Table<'a, R>(pub &'a Trace<R>);

impl<R: Columns> fmt::Display for Table<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>9}", "Iteration")?;
        for header in R::HEADERS {
            write!(f, "{header:>WIDTH$}")?;
        }
        writeln!(f)?;

        for record in self.0 {
            write!(f, "{:>9}", record.iter())?;
            for value in record.values() {
                write!(f, "{value:>WIDTH$.6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One-line outcome of a root-finder run.
pub struct Summary<'a, R>(pub &'a Solution<R>);

impl<R: IterationRecord> fmt::Display for Summary<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.0.root;
        match self.0.status {
            Status::Converged => write!(f, "Root found: {root:.6}")?,
            Status::MaxIters => write!(f, "Iteration limit reached, last estimate: {root:.6}")?,
            Status::StoppedByObserver => write!(f, "Stopped early, last estimate: {root:.6}")?,
        }
        if let Some(last) = self.0.trace.last() {
            write!(
                f,
                " after {} iterations (error {:.2e})",
                last.iter(),
                last.error()
            )?;
        }
        Ok(())
    }
}

/// Numbered elimination steps.
pub struct StepLog<'a>(pub &'a gauss::Solution);

impl fmt::Display for StepLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.steps.iter().enumerate() {
            writeln!(f, "{:>3}. {step}", i + 1)?;
        }
        Ok(())
    }
}

/// Solved variables, `x1` first.
pub struct Variables<'a>(pub &'a [f64]);

impl fmt::Display for Variables<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            writeln!(f, "x{} = {value:.6}", i + 1)?;
        }
        Ok(())
    }
}
