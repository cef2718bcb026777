use std::fmt;

use log::debug;
use midstep_core::{Derivative, Element, StateVector};

use super::{Config, Error};

/// A fixed-step midpoint (second-order Runge-Kutta) integrator.
///
/// Owns the state, the current time, the step size, the derivative, and two
/// scratch buffers allocated once at construction. Each [`step`](Self::step)
/// applies:
///
/// ```text
/// k1        = f(y_n, t_n)
/// y_mid     = y_n + k1 * dt * 0.5
/// k2        = f(y_mid, t_n + dt * 0.5)
/// y_{n+1}   = y_n + k2 * dt
/// t_{n+1}   = t_n + dt
/// ```
///
/// The state is updated in place. To keep ownership of a buffer, pass it as
/// `&mut [T]`; the updates are visible once the integrator is dropped.
///
/// # Example
///
/// ```
/// use midstep_solvers::transient::midpoint::Integrator;
///
/// let decay = |dydt: &mut [f64], y: &[f64], _t: f64| dydt[0] = -y[0];
///
/// let mut integrator = Integrator::new(vec![1.0], decay, 0.0, 0.1)?;
/// integrator.steps(10);
///
/// assert!((integrator.state()[0] - (-1.0_f64).exp()).abs() < 1e-3);
/// assert!((integrator.time() - 1.0).abs() < 1e-12);
/// # Ok::<(), midstep_solvers::transient::midpoint::Error>(())
/// ```
pub struct Integrator<S: StateVector, D> {
    state: S,
    derivative: D,
    time: S::Element,
    dt: S::Element,
    k1: S::Scratch,
    k2: S::Scratch,
}

impl<S, D> fmt::Debug for Integrator<S, D>
where
    S: StateVector + fmt::Debug,
    S::Scratch: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Integrator")
            .field("state", &self.state)
            .field("time", &self.time)
            .field("dt", &self.dt)
            .field("k1", &self.k1)
            .field("k2", &self.k2)
            .finish_non_exhaustive()
    }
}

impl<S, D> Integrator<S, D>
where
    S: StateVector,
    D: Derivative<S::Element>,
{
    /// Creates an integrator starting from `state` at time `t0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `state` is empty.
    pub fn new(state: S, derivative: D, t0: S::Element, dt: S::Element) -> Result<Self, Error> {
        Self::with_config(state, derivative, Config { t0, dt })
    }

    /// Creates an integrator from a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `state` is empty.
    pub fn with_config(
        state: S,
        derivative: D,
        config: Config<S::Element>,
    ) -> Result<Self, Error> {
        if state.is_empty() {
            return Err(Error::InvalidArgument {
                reason: "initial state must have at least one entry",
            });
        }

        let k1 = state.scratch();
        let k2 = state.scratch();

        debug!(
            "midpoint integrator: len={}, precision={:?}, t0={:?}, dt={:?}",
            state.len(),
            <S::Element as Element>::PRECISION,
            config.t0,
            config.dt,
        );

        Ok(Self {
            state,
            derivative,
            time: config.t0,
            dt: config.dt,
            k1,
            k2,
        })
    }

    /// Advances the state and time by one step.
    ///
    /// The state is written only after both derivative evaluations finish.
    /// Non-finite derivative values are not detected.
    pub fn step(&mut self) -> &mut Self {
        let dt = self.dt;
        let half = <S::Element as Element>::half();

        let y = self.state.as_mut_slice();
        let k1 = self.k1.as_mut();
        let mid = self.k2.as_mut();

        self.derivative.evaluate(k1, y, self.time);

        for ((m, &yi), &ki) in mid.iter_mut().zip(y.iter()).zip(k1.iter()) {
            *m = yi + ki * dt * half;
        }

        self.derivative.evaluate(k1, mid, self.time + dt * half);

        for (yi, &ki) in y.iter_mut().zip(k1.iter()) {
            *yi += ki * dt;
        }

        self.time += dt;
        self
    }

    /// Advances by `count` steps, in order.
    ///
    /// `steps(0)` leaves the integrator unchanged.
    pub fn steps(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.step();
        }
        self
    }

    /// Advances by a signed step count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `count` is negative or does not
    /// fit in a `usize`. The integrator is unchanged on error.
    pub fn try_steps(&mut self, count: i64) -> Result<&mut Self, Error> {
        if count < 0 {
            return Err(Error::InvalidArgument {
                reason: "step count must be non-negative",
            });
        }
        let count = usize::try_from(count).map_err(|_| Error::InvalidArgument {
            reason: "step count does not fit in usize",
        })?;
        Ok(self.steps(count))
    }
}

impl<S: StateVector, D> Integrator<S, D> {
    /// Returns the current state.
    pub fn state(&self) -> &[S::Element] {
        self.state.as_slice()
    }

    /// Returns the current time.
    pub fn time(&self) -> S::Element {
        self.time
    }

    /// Returns the step size.
    pub fn dt(&self) -> S::Element {
        self.dt
    }

    /// Returns the number of state entries.
    ///
    /// Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Consumes the integrator and returns its state.
    pub fn into_state(self) -> S {
        self.state
    }

    #[cfg(test)]
    fn scratch(&self) -> (&[S::Element], &[S::Element]) {
        (self.k1.as_ref(), self.k2.as_ref())
    }
}
