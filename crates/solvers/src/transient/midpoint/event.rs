/// Event emitted by the midpoint solver.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each completed step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, T> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Time at this step.
    pub time: T,

    /// State at this step.
    pub state: &'a [T],
}
