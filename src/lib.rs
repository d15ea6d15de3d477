//! # Mug Models
//!
//! Stateful models of drinking vessels: a capacity-bounded mug holding a
//! single beverage, pours between mugs, and a thermal mug whose contents cool
//! toward ambient by Newton's law of cooling.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`Mug`](models::mug::Mug) and
//!   [`ThermalMug`](models::thermal_mug::ThermalMug) models.
//! - [`support`]: Numeric constraints and unit helpers used by the models.
//!
//! ## Example
//!
//! ```
//! use mug_models::models::mug::{Capacity, Mug, MugConfig};
//! use uom::si::{f64::Volume, volume::milliliter};
//!
//! let config = MugConfig::with_capacity(Capacity::millilitres(450.0).unwrap())
//!     .decorated("Blue Bird");
//! let mut mug = Mug::new(config);
//!
//! mug.fill(Volume::new::<milliliter>(400.0), "coffee").unwrap();
//! mug.sip_standard().unwrap();
//! mug.sip(Volume::new::<milliliter>(100.0)).unwrap();
//! mug.sip(Volume::new::<milliliter>(50.0)).unwrap();
//!
//! assert_eq!(mug.to_string(), "The Blue Bird mug has 220ml of coffee left.");
//! ```
//!
//! ## Logging
//!
//! Operations emit [`tracing`] events. Routine transitions are logged at
//! `trace` and signalled conditions (overflow, depletion, refused mixes) at
//! `debug`. No subscriber is installed by this crate.

pub mod models;
pub mod support;
