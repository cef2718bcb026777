//! Solvers for transient (time-stepping) problems.
//!
//! # Solvers
//!
//! - [`midpoint`] — fixed-step second-order Runge-Kutta

pub mod midpoint;
