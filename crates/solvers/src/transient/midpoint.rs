//! Fixed-step midpoint (second-order Runge-Kutta) solver for ODE problems.
//!
//! Each step evaluates the derivative at the current state, uses it to
//! estimate the state half a step ahead, and advances the full step with the
//! derivative evaluated there:
//!
//! ```text
//! y_{n+1} = y_n + dt * f(y_n + f(y_n, t_n) * dt/2, t_n + dt/2)
//! ```
//!
//! The local truncation error is `O(dt³)` and the accumulated error over a
//! fixed interval is `O(dt²)`.
//!
//! Use [`Integrator`] directly to step by hand, or [`solve`] to run a number
//! of steps with an observer.
//!
//! # Example
//!
//! ```
//! use midstep_solvers::transient::midpoint::{self, Action, Event, Integrator, Status};
//!
//! let rotation = |dydt: &mut [f64], y: &[f64], _t: f64| {
//!     dydt[0] = -y[1];
//!     dydt[1] = y[0];
//! };
//! let mut integrator = Integrator::new([1.0, 0.0], rotation, 0.0, 0.01)?;
//!
//! // Stop once the first component crosses zero.
//! let solution = midpoint::solve(&mut integrator, 1_000, |event: &Event<'_, f64>| {
//!     (event.state[0] < 0.0).then_some(Action::StopEarly)
//! });
//!
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! assert!((solution.time - std::f64::consts::FRAC_PI_2).abs() < 0.02);
//! # Ok::<(), midpoint::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod integrator;
mod solution;

pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use integrator::Integrator;
pub use solution::{Solution, Status};

use log::{debug, trace};
use midstep_core::{Derivative, Observer, StateVector};

/// Runs up to `steps` midpoint steps, reporting each one to an observer.
///
/// # Algorithm
///
/// 1. Emit an [`Event`] for the integrator's current state as step 0.
/// 2. For each step:
///    - Advance the integrator by one step.
///    - Emit an [`Event`] with the new time and state.
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return a [`Solution`] describing how the run ended.
///
/// Steps run strictly in order and are never skipped. The final state stays
/// in `integrator`.
pub fn solve<S, D, Obs>(
    integrator: &mut Integrator<S, D>,
    steps: usize,
    mut observer: Obs,
) -> Solution<S::Element>
where
    S: StateVector,
    D: Derivative<S::Element>,
    Obs: for<'a> Observer<Event<'a, S::Element>, Action>,
{
    if let Some(Action::StopEarly) = observer.observe(&current_event(integrator, 0)) {
        return stopped(integrator, 0);
    }

    for step in 1..=steps {
        integrator.step();
        trace!("midpoint step {step}: t={:?}", integrator.time());

        if let Some(Action::StopEarly) = observer.observe(&current_event(integrator, step)) {
            return stopped(integrator, step);
        }
    }

    debug!(
        "midpoint solve complete: steps={steps}, t={:?}",
        integrator.time()
    );

    Solution {
        status: Status::Complete,
        steps,
        time: integrator.time(),
    }
}

/// Runs `steps` midpoint steps without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<S, D>(
    integrator: &mut Integrator<S, D>,
    steps: usize,
) -> Solution<S::Element>
where
    S: StateVector,
    D: Derivative<S::Element>,
{
    solve(integrator, steps, ())
}

fn current_event<S: StateVector, D>(
    integrator: &Integrator<S, D>,
    step: usize,
) -> Event<'_, S::Element> {
    Event {
        step,
        time: integrator.time(),
        state: integrator.state(),
    }
}

fn stopped<S: StateVector, D>(integrator: &Integrator<S, D>, step: usize) -> Solution<S::Element> {
    debug!(
        "midpoint solve stopped by observer: steps={step}, t={:?}",
        integrator.time()
    );

    Solution {
        status: Status::StoppedByObserver,
        steps: step,
        time: integrator.time(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn rotation(dydt: &mut [f64], y: &[f64], _t: f64) {
        dydt[0] = -y[1];
        dydt[1] = y[0];
    }

    #[test]
    fn unobserved_runs_all_steps() {
        let mut integrator = Integrator::new([1.0, 0.0], rotation, 1.5, 1.0).unwrap();

        let solution = solve_unobserved(&mut integrator, 2);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 2);
        assert_relative_eq!(solution.time, 3.5);
        assert_relative_eq!(integrator.state()[0], -0.75);
        assert_relative_eq!(integrator.state()[1], 1.0);
    }

    #[test]
    fn observer_can_stop_early() {
        let mut integrator = Integrator::new([1.0, 0.0], rotation, 0.0, 0.1).unwrap();

        let observer = |event: &Event<'_, f64>| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&mut integrator, 100, observer);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_relative_eq!(solution.time, 0.5, epsilon = 1e-12);
        assert_relative_eq!(integrator.time(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn stop_at_initial_event_takes_no_steps() {
        let mut integrator = Integrator::new([1.0, 0.0], rotation, 2.0, 0.1).unwrap();

        let solution = solve(&mut integrator, 10, |_: &Event<'_, f64>| {
            Some(Action::StopEarly)
        });

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 0);
        assert_eq!(integrator.state(), &[1.0, 0.0]);
        assert_eq!(integrator.time(), 2.0);
    }

    #[test]
    fn zero_steps_returns_initial() {
        let mut integrator = Integrator::new(vec![5.0, 0.0], rotation, 0.0, 0.1).unwrap();

        let solution = solve_unobserved(&mut integrator, 0);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.time, 0.0);
        assert_eq!(integrator.state(), &[5.0, 0.0]);
    }

    #[test]
    fn events_follow_step_order() {
        let mut integrator = Integrator::new([1.0, 0.0], rotation, 0.0, 0.25).unwrap();

        let mut seen = Vec::new();
        solve(&mut integrator, 4, |event: &Event<'_, f64>| {
            seen.push((event.step, event.time, event.state.to_vec()));
            None
        });

        let steps: Vec<usize> = seen.iter().map(|(step, _, _)| *step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 4]);

        let times: Vec<f64> = seen.iter().map(|(_, time, _)| *time).collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        assert_eq!(seen[0].2, vec![1.0, 0.0]);
        assert_eq!(seen[4].2, integrator.state().to_vec());
    }

    #[test]
    fn solve_continues_from_current_state() {
        let mut solved = Integrator::new([1.0, 0.0], rotation, 0.0, 0.2).unwrap();
        let mut stepped = Integrator::new([1.0, 0.0], rotation, 0.0, 0.2).unwrap();

        solved.steps(3);
        solve_unobserved(&mut solved, 4);
        stepped.steps(7);

        assert_eq!(solved.state(), stepped.state());
        assert_eq!(solved.time(), stepped.time());
    }
}
