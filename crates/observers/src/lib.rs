//! Reusable observers for midstep solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers whose events expose a time and a state.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasTime`], [`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trajectory`] — records `(time, state)` samples
//! - [`StopAtTime`] — stops the solver once a target time is reached
//!
//! [`Observer`]: midstep_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop_at_time;
mod trajectory;

pub use stop_at_time::StopAtTime;
pub use trajectory::Trajectory;
