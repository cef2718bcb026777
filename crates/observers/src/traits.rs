//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry the independent variable
//! - [`HasState`] — events that carry the state vector
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use midstep_core::Observer;
//! use midstep_observers::traits::{CanStopEarly, HasState};
//!
//! /// Stops once any entry leaves `[-bound, bound]`.
//! struct Bounded {
//!     bound: f64,
//! }
//!
//! impl<E, A> Observer<E, A> for Bounded
//! where
//!     E: HasState<Element = f64>,
//!     A: CanStopEarly,
//! {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let escaped = event.state().iter().any(|x| x.abs() > self.bound);
//!         escaped.then(A::stop_early)
//!     }
//! }
//! ```

use midstep_solvers::transient::midpoint;

/// An event that carries the current value of the independent variable.
pub trait HasTime {
    /// The scalar type of the independent variable.
    type Time: Copy;

    /// Returns the time for this event.
    fn time(&self) -> Self::Time;
}

/// An event that carries the current state vector.
pub trait HasState {
    /// The scalar type of each state entry.
    type Element;

    /// Returns the state for this event.
    fn state(&self) -> &[Self::Element];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- midpoint::Event ---

impl<T: Copy> HasTime for midpoint::Event<'_, T> {
    type Time = T;

    fn time(&self) -> T {
        self.time
    }
}

impl<T> HasState for midpoint::Event<'_, T> {
    type Element = T;

    fn state(&self) -> &[T] {
        self.state
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for midpoint::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
