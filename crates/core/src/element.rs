use std::{fmt::Debug, ops::AddAssign};

use num_traits::Float;

/// The floating point precision of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 32-bit IEEE 754 float.
    Single,

    /// 64-bit IEEE 754 float.
    Double,
}

/// A scalar type that state vectors, times, and step sizes are made of.
///
/// The same element type is used for every entry of a state vector, for its
/// scratch buffers, and for the independent variable, so a single integrator
/// never mixes precisions.
pub trait Element: Float + AddAssign + Debug + Send + Sync + 'static {
    /// The precision of this element type.
    const PRECISION: Precision;

    /// Returns one half in this precision.
    #[must_use]
    fn half() -> Self {
        Self::one() / (Self::one() + Self::one())
    }
}

impl Element for f32 {
    const PRECISION: Precision = Precision::Single;

    fn half() -> Self {
        0.5
    }
}

impl Element for f64 {
    const PRECISION: Precision = Precision::Double;

    fn half() -> Self {
        0.5
    }
}
