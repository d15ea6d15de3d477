use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};
use uom::si::{
    f64::{Frequency, Ratio, Time},
    frequency::hertz,
    ratio::ratio,
};

/// Seconds per minute, for rates quoted per minute.
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Decay rate `k` of a beverage's excess temperature over ambient.
///
/// The excess decays as `exp(-k * t)`. The value must be non-negative;
/// zero describes a perfectly insulated mug.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HeatLossRate(Constrained<Frequency, NonNegative>);

impl HeatLossRate {
    /// Create a [`HeatLossRate`] from a rate per minute.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or `NaN`.
    pub fn per_minute(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Frequency::new::<hertz>(value / SECONDS_PER_MINUTE))
    }

    /// Create a [`HeatLossRate`] from a frequency.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the frequency is negative or `NaN`.
    pub fn from_quantity(quantity: Frequency) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// A rate at which nothing ever cools.
    #[must_use]
    pub fn insulated() -> Self {
        Self(NonNegative::zero())
    }

    /// Returns the rate per minute.
    #[must_use]
    pub fn as_per_minute(&self) -> f64 {
        self.get::<hertz>() * SECONDS_PER_MINUTE
    }

    /// Returns the fraction `exp(-k * elapsed)` of the initial excess
    /// temperature remaining after `elapsed`.
    #[must_use]
    pub fn decay_factor(&self, elapsed: Time) -> f64 {
        let exponent: Ratio = **self * elapsed;
        (-exponent.get::<ratio>()).exp()
    }
}

impl Deref for HeatLossRate {
    type Target = Frequency;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
