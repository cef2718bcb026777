use midstep_core::Element;

/// Start time and step size for a midpoint integrator.
///
/// A negative `dt` integrates backward in time. The step size is not
/// validated; a zero or non-finite `dt` is accepted and produces whatever the
/// arithmetic produces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config<T> {
    /// Time of the initial state.
    pub t0: T,

    /// Step size; its sign sets the integration direction.
    pub dt: T,
}

impl<T: Element> Config<T> {
    /// Creates a config stepping by `dt` from time zero.
    #[must_use]
    pub fn new(dt: T) -> Self {
        Self { t0: T::zero(), dt }
    }

    /// Sets the start time.
    #[must_use]
    pub fn with_t0(mut self, t0: T) -> Self {
        self.t0 = t0;
        self
    }

    /// Sets the step size.
    #[must_use]
    pub fn with_dt(mut self, dt: T) -> Self {
        self.dt = dt;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_zero() {
        let config = Config::new(0.25_f64);
        assert_eq!(config, Config { t0: 0.0, dt: 0.25 });
    }

    #[test]
    fn builder_overrides() {
        let config = Config::new(0.25_f32).with_t0(1.5).with_dt(-0.5);
        assert_eq!(config.t0, 1.5);
        assert_eq!(config.dt, -0.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let config = Config::new(0.125_f64).with_t0(-2.0);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"t0":-2.0,"dt":0.125}"#);

        let parsed: Config<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
