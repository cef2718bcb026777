use crate::Element;

/// Evaluates the time derivative of a state vector.
///
/// `evaluate` must write every entry of `output`. The integrator passes an
/// `output` and a `state` of equal length and does not validate what the
/// implementation writes, so non-finite values propagate into the state.
///
/// Any closure of the form `FnMut(&mut [T], &[T], T)` is a derivative:
///
/// ```
/// use midstep_core::Derivative;
///
/// let mut decay = |dydt: &mut [f64], y: &[f64], _t: f64| dydt[0] = -y[0];
///
/// let mut out = [0.0];
/// decay.evaluate(&mut out, &[2.0], 0.0);
/// assert_eq!(out, [-2.0]);
/// ```
pub trait Derivative<T: Element> {
    /// Writes `dy/dt` at (`state`, `time`) into `output`.
    fn evaluate(&mut self, output: &mut [T], state: &[T], time: T);
}

impl<T, F> Derivative<T> for F
where
    T: Element,
    F: FnMut(&mut [T], &[T], T),
{
    fn evaluate(&mut self, output: &mut [T], state: &[T], time: T) {
        self(output, state, time);
    }
}
