/// Receives solver events and optionally returns a control action.
///
/// Solvers call [`observe`](Observer::observe) at each point they report
/// progress. Returning `None` lets the solver continue unchanged; returning
/// `Some(action)` asks it to react, with the meaning of the action defined by
/// each solver.
///
/// Implemented for `()` (observe nothing) and for any closure
/// `FnMut(&E) -> Option<A>`.
pub trait Observer<E, A> {
    /// Observes an event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
