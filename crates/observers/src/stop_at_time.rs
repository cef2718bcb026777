use midstep_core::Observer;

use crate::traits::{CanStopEarly, HasTime};

/// Stops the solver once the event time reaches `target`.
///
/// The direction is taken from the first observed event: if it is at or
/// before `target` the solver stops at the first time `>= target`, otherwise
/// at the first time `<= target`. Accumulated rounding in the time can delay
/// the stop by one step when `target` is not an exact multiple of the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtTime<T> {
    target: T,
    forward: Option<bool>,
}

impl<T: PartialOrd + Copy> StopAtTime<T> {
    /// Creates an observer that stops at `target`.
    #[must_use]
    pub fn new(target: T) -> Self {
        Self {
            target,
            forward: None,
        }
    }

    /// Returns the target time.
    pub fn target(&self) -> T {
        self.target
    }
}

impl<E, A, T> Observer<E, A> for StopAtTime<T>
where
    E: HasTime<Time = T>,
    A: CanStopEarly,
    T: PartialOrd + Copy,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let time = event.time();
        let forward = *self.forward.get_or_insert(time <= self.target);

        let reached = if forward {
            time >= self.target
        } else {
            time <= self.target
        };

        reached.then(A::stop_early)
    }
}
