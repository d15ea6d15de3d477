use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{f64::Volume, volume::milliliter};

/// Capacity used when a mug is built without one, in millilitres.
pub const DEFAULT_CAPACITY_ML: f64 = 350.0;

/// The most a mug can hold.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Capacity(Constrained<Volume, StrictlyPositive>);

impl Capacity {
    /// Create a [`Capacity`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::volume::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(Volume::new::<U>(value))
    }

    /// Create a [`Capacity`] from a volume.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the volume is not strictly positive.
    pub fn from_quantity(quantity: Volume) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`Capacity`] in millilitres.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn millilitres(value: f64) -> ConstraintResult<Self> {
        Self::new::<milliliter>(value)
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self(Constrained::new_unchecked(Volume::new::<milliliter>(
            DEFAULT_CAPACITY_ML,
        )))
    }
}

impl Deref for Capacity {
    type Target = Volume;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
