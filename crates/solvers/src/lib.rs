//! Numerical solvers for midstep.
//!
//! # Modules
//!
//! - [`transient`] — fixed-step integrators that advance a state in time

pub mod transient;
