//! Core traits for the numkit numerical kernel.
//!
//! This crate defines the seams that the evaluator, the solvers, and any
//! presentation layer build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output, such as
//!   a parsed formula mapping `x` to `f(x)`
//! - [`Observer`] — receives solver events and optionally returns control actions

mod model;
mod observer;

pub use model::Model;
pub use observer::Observer;
