//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities: volumes, temperatures,
//! elapsed times and heat loss rates. This module collects the small helpers
//! the models need on top of it.
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts one absolute temperature from
//! another and yields a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use mug_models::support::units::TemperatureDifference;
//!
//! let tea = ThermodynamicTemperature::new::<degree_celsius>(85.0);
//! let room = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let excess = tea.minus(room);
//! // excess is a TemperatureInterval of 65 K
//! ```
//!
//! ## Displaying volumes
//!
//! [`rounded_millilitres`] converts a [`Volume`] to millilitres with the
//! floating-point noise of the SI round trip removed. [`volume_tolerance`]
//! is the matching threshold below which two volumes count as equal.

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;

use uom::si::{f64::Volume, volume::milliliter};

/// Reported volumes are resolved to a millionth of a millilitre.
const STEPS_PER_MILLILITRE: f64 = 1e6;

/// Returns `volume` in millilitres, rounded to a millionth of a millilitre.
///
/// Volumes are stored in cubic metres, so a value built from `370.0` ml can
/// come back as `369.99999999999994`. Rounding keeps reported levels stable.
#[must_use]
pub fn rounded_millilitres(volume: Volume) -> f64 {
    let ml = volume.get::<milliliter>();
    (ml * STEPS_PER_MILLILITRE).round() / STEPS_PER_MILLILITRE
}

/// Returns the largest difference at which two volumes are treated as equal.
///
/// This is half the reporting resolution of [`rounded_millilitres`], so a
/// volume that reports as `0` ml never counts as holding anything.
#[must_use]
pub fn volume_tolerance() -> Volume {
    Volume::new::<milliliter>(0.5 / STEPS_PER_MILLILITRE)
}
