//! Public vessel models.
//!
//! - [`mug`]: the capacity-bounded [`Mug`](mug::Mug) state machine and
//!   transfers between mugs.
//! - [`thermal_mug`]: a [`ThermalMug`](thermal_mug::ThermalMug) that wraps a
//!   mug and tracks how its contents cool after each fill.
//!
//! All volume logic lives in [`mug`]. The thermal variant delegates to it
//! rather than re-implementing any of the fill or sip rules.

pub mod mug;
pub mod thermal_mug;
