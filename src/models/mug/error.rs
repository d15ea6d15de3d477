use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Beverage;

/// Errors that reject a fill outright, leaving the mug unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FillError {
    /// The mug still holds a different beverage.
    #[error("cannot add {offered} to a mug holding {held}")]
    ContentMismatch {
        /// What the mug currently holds.
        held: Beverage,
        /// What the caller tried to pour in.
        offered: Beverage,
    },

    /// The quantity was negative or not a number.
    #[error("invalid fill quantity")]
    InvalidQuantity(#[from] ConstraintError),
}

/// Errors that reject a sip, leaving the mug unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SipError {
    /// There is nothing left to drink.
    #[error("your mug is already empty")]
    AlreadyEmpty,

    /// The sip size was negative or not a number.
    #[error("invalid sip size")]
    InvalidQuantity(#[from] ConstraintError),
}
