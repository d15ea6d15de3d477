//! Newton's law of cooling.
//!
//! The excess of the beverage temperature over ambient decays exponentially:
//!
//! ```text
//! T(t) = T_amb + (T_0 - T_amb) * exp(-k * t)
//! ```

use std::convert::Infallible;

use twine_core::Model;
use uom::{
    ConstZero,
    si::{
        f64::{ThermodynamicTemperature, Time},
        frequency::hertz,
        temperature_interval::kelvin as delta_kelvin,
        time::second,
    },
};

use crate::support::units::TemperatureDifference;

use super::HeatLossRate;

/// Returns the temperature after `elapsed` of a beverage that started at `initial`.
pub(super) fn cooled_temperature(
    initial: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
    rate: HeatLossRate,
    elapsed: Time,
) -> ThermodynamicTemperature {
    ambient + initial.minus(ambient) * rate.decay_factor(elapsed)
}

/// Returns how long a beverage at `initial` takes to reach `target`.
///
/// Returns `Some(Time::ZERO)` if `target` is already at or behind the
/// beverage on its way to ambient, and `None` if it will never be reached:
/// `target` lies at or beyond ambient, or the mug does not lose heat.
pub(super) fn time_to_reach(
    initial: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
    rate: HeatLossRate,
    target: ThermodynamicTemperature,
) -> Option<Time> {
    let excess = initial.minus(ambient).get::<delta_kelvin>();
    let goal = target.minus(ambient).get::<delta_kelvin>();

    if excess == goal {
        return Some(Time::ZERO);
    }
    if excess == 0.0 {
        return None;
    }

    let remaining = goal / excess;
    if remaining >= 1.0 {
        return Some(Time::ZERO);
    }
    if remaining <= 0.0 || rate.get::<hertz>() == 0.0 {
        return None;
    }

    Some(Time::new::<second>(-remaining.ln() / rate.get::<hertz>()))
}

/// Cooling curve of a single pour.
///
/// As a [`Model`], maps elapsed time since the pour to the beverage
/// temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingCurve {
    /// Temperature at the moment of the pour.
    pub initial: ThermodynamicTemperature,

    /// Temperature of the surroundings.
    pub ambient: ThermodynamicTemperature,

    /// Rate at which the excess over ambient decays.
    pub rate: HeatLossRate,
}

impl CoolingCurve {
    /// Returns the temperature after `elapsed`.
    #[must_use]
    pub fn temperature_after(&self, elapsed: Time) -> ThermodynamicTemperature {
        cooled_temperature(self.initial, self.ambient, self.rate, elapsed)
    }

    /// Returns the time after the pour at which the beverage reaches `target`.
    ///
    /// See [`ThermalMug::time_until`](super::ThermalMug::time_until) for the
    /// meaning of `None` and zero.
    #[must_use]
    pub fn time_to_reach(&self, target: ThermodynamicTemperature) -> Option<Time> {
        time_to_reach(self.initial, self.ambient, self.rate, target)
    }
}

impl Model for CoolingCurve {
    type Input = Time;
    type Output = ThermodynamicTemperature;
    type Error = Infallible;

    fn call(&self, elapsed: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.temperature_after(*elapsed))
    }
}
