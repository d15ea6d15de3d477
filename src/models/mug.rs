//! A drinking mug holding a single beverage.
//!
//! [`Mug`] is a small state machine over its level and content:
//!
//! - [`Mug::fill`] adds a beverage, bounded by the remaining room.
//! - [`Mug::sip`] drinks from it, bounded by the current level.
//! - [`Mug::empty`] and [`Mug::wash`] reset it.
//! - [`transfer`] pours one mug into another.
//!
//! The level always satisfies `0 <= level <= capacity`.
//!
//! Two mugs never hold a mixture. A fill or transfer that would combine
//! different beverages is turned away, while one that only overflows is
//! applied up to capacity and reported through its outcome.
//!
//! Draining a mug by sipping leaves its content label in place, unlike
//! [`Mug::empty`], which clears it. A fill of a different beverage into a
//! drained mug relabels it.

mod beverage;
mod capacity;
mod config;
mod error;
mod outcome;
mod state;
mod transfer;

pub use beverage::{Beverage, DEFAULT_BEVERAGE};
pub use capacity::{Capacity, DEFAULT_CAPACITY_ML};
pub use config::MugConfig;
pub use error::{FillError, SipError};
pub use outcome::{FillOutcome, SipOutcome, TransferOutcome};
pub use state::MugState;
pub use transfer::transfer;

use std::fmt;

use tracing::{debug, trace};
use uom::{
    ConstZero,
    si::{f64::Volume, volume::milliliter},
};

use crate::support::{
    constraint::NonNegative,
    units::{rounded_millilitres, volume_tolerance},
};

/// Size of a sip taken with [`Mug::sip_standard`], in millilitres.
pub const STANDARD_SIP_ML: f64 = 30.0;

/// Returns the volume of a standard sip.
#[must_use]
pub fn standard_sip() -> Volume {
    Volume::new::<milliliter>(STANDARD_SIP_ML)
}

/// A mug with a fixed capacity holding at most one beverage.
#[derive(Debug, Clone, PartialEq)]
pub struct Mug {
    capacity: Capacity,
    decoration: String,
    level: Volume,
    clean: bool,
    content: Option<Beverage>,
}

impl Default for Mug {
    fn default() -> Self {
        Self::new(MugConfig::default())
    }
}

impl Mug {
    /// Creates an empty mug.
    #[must_use]
    pub fn new(config: MugConfig) -> Self {
        let MugConfig {
            capacity,
            decoration,
            clean,
        } = config;

        Self {
            capacity,
            decoration,
            level: Volume::ZERO,
            clean,
            content: None,
        }
    }

    /// Returns the most this mug can hold.
    #[must_use]
    pub fn capacity(&self) -> Volume {
        *self.capacity
    }

    /// Returns the cosmetic decoration.
    #[must_use]
    pub fn decoration(&self) -> &str {
        &self.decoration
    }

    /// Returns the volume currently held.
    #[must_use]
    pub fn level(&self) -> Volume {
        self.level
    }

    /// Returns the unused volume.
    #[must_use]
    pub fn room(&self) -> Volume {
        *self.capacity - self.level
    }

    /// Returns the recorded beverage, or `None` once the mug has been emptied.
    ///
    /// A mug drained by sipping still reports the beverage it last held.
    #[must_use]
    pub fn content(&self) -> Option<&Beverage> {
        self.content.as_ref()
    }

    /// Returns `true` if the mug has been washed since it was last filled.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.clean
    }

    /// Returns the coarse fill state.
    #[must_use]
    pub fn state(&self) -> MugState {
        if self.level <= volume_tolerance() {
            MugState::Empty
        } else if self.level >= *self.capacity - volume_tolerance() {
            MugState::Full
        } else {
            MugState::Partial
        }
    }

    /// Pours `quantity` of `beverage` into the mug.
    ///
    /// Anything that does not fit is discarded and reported as
    /// [`FillOutcome::Overflowed`]. Any accepted fill, even one of zero
    /// volume, leaves the mug dirty.
    ///
    /// # Errors
    ///
    /// - [`FillError::ContentMismatch`] if the mug still holds a different
    ///   beverage. The mug is left unchanged.
    /// - [`FillError::InvalidQuantity`] if `quantity` is negative or `NaN`.
    pub fn fill(
        &mut self,
        quantity: Volume,
        beverage: impl Into<Beverage>,
    ) -> Result<FillOutcome, FillError> {
        let quantity = NonNegative::new(quantity)?.into_inner();
        let beverage = beverage.into();

        match &self.content {
            Some(held) if *held != beverage && self.level > volume_tolerance() => {
                debug!(%held, offered = %beverage, "refused to mix beverages");
                return Err(FillError::ContentMismatch {
                    held: held.clone(),
                    offered: beverage,
                });
            }
            _ => {}
        }

        self.content = Some(beverage);
        self.clean = false;

        let room = self.room();
        if quantity > room + volume_tolerance() {
            self.level = *self.capacity;
            let spilled = quantity - room;
            debug!(spilled_ml = rounded_millilitres(spilled), "fill overflowed");
            return Ok(FillOutcome::Overflowed { spilled });
        }

        self.level += quantity;
        self.snap_level();
        trace!(level_ml = rounded_millilitres(self.level), "filled");
        Ok(FillOutcome::Filled)
    }

    /// Drinks `size` from the mug.
    ///
    /// A sip at least as large as the remaining level drains the mug and
    /// reports [`SipOutcome::Depleted`]. The content label is kept.
    ///
    /// # Errors
    ///
    /// - [`SipError::AlreadyEmpty`] if there is nothing to drink.
    /// - [`SipError::InvalidQuantity`] if `size` is negative or `NaN`.
    pub fn sip(&mut self, size: Volume) -> Result<SipOutcome, SipError> {
        let size = NonNegative::new(size)?.into_inner();

        let content = match &self.content {
            Some(content) if self.level > volume_tolerance() => content,
            _ => return Err(SipError::AlreadyEmpty),
        };

        if size >= self.level - volume_tolerance() {
            let content = content.clone();
            self.level = Volume::ZERO;
            debug!(%content, "drained");
            return Ok(SipOutcome::Depleted { content });
        }

        self.level -= size;
        self.snap_level();
        trace!(level_ml = rounded_millilitres(self.level), "sipped");
        Ok(SipOutcome::Sipped)
    }

    /// Pins a level within [`volume_tolerance`] of empty or full to exactly
    /// zero or capacity.
    fn snap_level(&mut self) {
        if self.level <= volume_tolerance() {
            self.level = Volume::ZERO;
        } else if self.level >= *self.capacity - volume_tolerance() {
            self.level = *self.capacity;
        }
    }

    /// Takes a [standard sip](STANDARD_SIP_ML).
    ///
    /// # Errors
    ///
    /// Returns [`SipError::AlreadyEmpty`] if there is nothing to drink.
    pub fn sip_standard(&mut self) -> Result<SipOutcome, SipError> {
        self.sip(standard_sip())
    }

    /// Pours the contents away and forgets what the mug held.
    pub fn empty(&mut self) {
        self.level = Volume::ZERO;
        self.content = None;
        trace!("emptied");
    }

    /// Empties the mug and marks it clean.
    pub fn wash(&mut self) {
        self.empty();
        self.clean = true;
    }

    /// Pours as much of this mug as fits into `target`.
    ///
    /// See [`transfer`].
    pub fn transfer_into(&mut self, target: &mut Mug) -> TransferOutcome {
        transfer(self, target)
    }

    /// Describes what is left in the mug.
    ///
    /// Returns one of `"empty."`, `"full of <content>."`, or
    /// `"has <level>ml of <content> left."`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.status() {
            Status::Empty => "empty.".to_owned(),
            Status::Full(content) => format!("full of {content}."),
            Status::Partial(level_ml, content) => format!("has {level_ml}ml of {content} left."),
        }
    }

    fn status(&self) -> Status<'_> {
        match (self.state(), &self.content) {
            (MugState::Empty, _) | (_, None) => Status::Empty,
            (MugState::Full, Some(content)) => Status::Full(content),
            (MugState::Partial, Some(content)) => {
                Status::Partial(rounded_millilitres(self.level), content)
            }
        }
    }
}

enum Status<'a> {
    Empty,
    Full(&'a Beverage),
    Partial(f64, &'a Beverage),
}

/// Renders a full sentence, e.g. `The Blue Bird mug has 220ml of coffee left.`
impl fmt::Display for Mug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decoration.is_empty() {
            f.write_str("The mug ")?;
        } else {
            write!(f, "The {} mug ", self.decoration)?;
        }

        match self.status() {
            Status::Empty => f.write_str("is empty."),
            Status::Full(content) => write!(f, "is full of {content}."),
            Status::Partial(level_ml, content) => write!(f, "has {level_ml}ml of {content} left."),
        }
    }
}
