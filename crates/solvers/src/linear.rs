//! Solvers for dense real linear systems `A x = b`.
//!
//! # Solvers
//!
//! - [`gauss`] — Gaussian elimination with partial pivoting over an
//!   augmented matrix `[A | b]`

pub mod gauss;
