use std::num::NonZeroUsize;

use midstep_core::{Element, Observer};

use crate::traits::{HasState, HasTime};

/// Records the time and state of observed events.
///
/// By default every event is recorded. Use [`Trajectory::every`] to keep only
/// every `stride`-th event, counting from the first one. The observer never
/// returns an action.
///
/// Pass it by `&mut` to keep the recording after the solver returns:
///
/// ```
/// use midstep_observers::Trajectory;
/// use midstep_solvers::transient::midpoint::{self, Integrator};
///
/// let decay = |dydt: &mut [f64], y: &[f64], _t: f64| dydt[0] = -y[0];
/// let mut integrator = Integrator::new(vec![1.0], decay, 0.0, 0.5)?;
///
/// let mut trajectory = Trajectory::<f64>::new();
/// midpoint::solve(&mut integrator, 4, &mut trajectory);
///
/// assert_eq!(trajectory.times(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
/// # Ok::<(), midpoint::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T> {
    stride: NonZeroUsize,
    seen: usize,
    times: Vec<T>,
    states: Vec<Vec<T>>,
}

impl<T: Element> Trajectory<T> {
    /// Creates a trajectory that records every event.
    #[must_use]
    pub fn new() -> Self {
        Self::every(NonZeroUsize::MIN)
    }

    /// Creates a trajectory that records every `stride`-th event.
    #[must_use]
    pub fn every(stride: NonZeroUsize) -> Self {
        Self {
            stride,
            seen: 0,
            times: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Returns the recorded times.
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Returns the recorded states, one per recorded time.
    pub fn states(&self) -> &[Vec<T>] {
        &self.states
    }

    /// Returns the number of recorded samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates over recorded `(time, state)` samples.
    pub fn iter(&self) -> impl Iterator<Item = (T, &[T])> {
        self.times
            .iter()
            .copied()
            .zip(self.states.iter().map(Vec::as_slice))
    }

    fn record<E>(&mut self, event: &E)
    where
        E: HasTime<Time = T> + HasState<Element = T>,
    {
        if self.seen % self.stride == 0 {
            self.times.push(event.time());
            self.states.push(event.state().to_vec());
        }
        self.seen += 1;
    }
}

impl<T: Element> Default for Trajectory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A, T> Observer<E, A> for Trajectory<T>
where
    E: HasTime<Time = T> + HasState<Element = T>,
    T: Element,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<E, A, T> Observer<E, A> for &mut Trajectory<T>
where
    E: HasTime<Time = T> + HasState<Element = T>,
    T: Element,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
