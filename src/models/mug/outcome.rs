//! Successful results of volume-bounded operations.
//!
//! Overflowing a fill, draining the last of a drink, and only partly
//! emptying a mug into another are not errors, but the caller may still want
//! to know they happened.

use std::fmt;

use uom::{ConstZero, si::f64::Volume};

use crate::support::units::rounded_millilitres;

use super::Beverage;

/// Result of a fill that was accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillOutcome {
    /// The whole quantity fit.
    Filled,
    /// The mug was filled to capacity and the excess was lost.
    Overflowed {
        /// Volume that did not fit.
        spilled: Volume,
    },
}

impl fmt::Display for FillOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filled => f.write_str("filled"),
            Self::Overflowed { spilled } => write!(
                f,
                "oh dear, {}ml of that overflowed",
                rounded_millilitres(*spilled)
            ),
        }
    }
}

/// Result of a sip that was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SipOutcome {
    /// Some of the drink remains.
    Sipped,
    /// The sip drained the mug.
    Depleted {
        /// The beverage that ran out.
        content: Beverage,
    },
}

impl fmt::Display for SipOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sipped => f.write_str("sipped"),
            Self::Depleted { content } => write!(f, "oh dear, all your {content} has gone"),
        }
    }
}

/// Result of pouring one mug into another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferOutcome {
    /// Everything in the source moved into the target.
    Complete {
        /// Volume moved.
        moved: Volume,
    },
    /// The target filled up before the source ran out.
    Partial {
        /// Volume moved.
        moved: Volume,
        /// Volume left behind in the source.
        remaining: Volume,
    },
    /// The mugs hold different beverages, so nothing moved.
    Refused,
}

impl TransferOutcome {
    /// Returns the volume that changed mugs.
    #[must_use]
    pub fn moved(&self) -> Volume {
        match self {
            Self::Complete { moved } | Self::Partial { moved, .. } => *moved,
            Self::Refused => Volume::ZERO,
        }
    }
}

impl fmt::Display for TransferOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete { moved } => write!(f, "poured {}ml", rounded_millilitres(*moved)),
            Self::Partial { moved, remaining } => write!(
                f,
                "poured {}ml, {}ml did not fit",
                rounded_millilitres(*moved),
                rounded_millilitres(*remaining)
            ),
            Self::Refused => f.write_str("sorry, those drinks don't mix"),
        }
    }
}
