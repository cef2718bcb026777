//! Core traits and types for midstep.
//!
//! This crate defines the shared abstractions that solvers and observers build
//! on:
//!
//! - [`Element`] — the floating point scalar a state is made of
//! - [`StateVector`] — a fixed-length state that can allocate matching scratch
//! - [`Derivative`] — a caller-supplied `dy/dt` evaluator
//! - [`Observer`] — receives solver events and optionally returns control actions

mod derivative;
mod element;
mod observer;
mod state;

pub use derivative::Derivative;
pub use element::{Element, Precision};
pub use observer::Observer;
pub use state::StateVector;
