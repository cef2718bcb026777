/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a midpoint integration run.
///
/// The final state stays with the integrator; read it with
/// [`Integrator::state`](super::Integrator::state).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    /// How the solver terminated.
    pub status: Status,

    /// Number of integration steps completed during this run.
    pub steps: usize,

    /// Time when the run ended.
    pub time: T,
}
