//! Supporting utilities used by the vessel models.
//!
//! These modules are public because they're useful to callers building
//! inputs for the models, but their APIs are not stable.

pub mod constraint;
pub mod units;
