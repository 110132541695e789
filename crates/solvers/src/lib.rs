//! Numerical solvers that keep a full record of their work.
//!
//! - [`equation`] — root finders for a scalar function of one variable
//!   ([`equation::bisection`], [`equation::secant`])
//! - [`linear`] — dense linear systems ([`linear::gauss`])
//!
//! Every solver is a pure function: it owns copies of its inputs, returns a
//! structured result, and never prints. Progress is available through the
//! returned [`Trace`] (or step log) and, for root finders, through an
//! [`Observer`](numkit_core::Observer) called once per iteration.
//!
//! Library code only emits `log` records at `debug` and `trace` level; hosts
//! decide whether and how to display them.

pub mod equation;
pub mod linear;

mod trace;

pub use trace::{IterationRecord, Trace};
