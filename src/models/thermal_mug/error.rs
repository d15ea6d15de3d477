use thiserror::Error;

use crate::{models::mug::FillError, support::constraint::ConstraintError};

/// Errors from a [`ThermalMug`](super::ThermalMug).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThermalError {
    /// The temperature was queried before the mug was ever filled.
    #[error("no fill has been recorded")]
    NoFillRecorded,

    /// A pour temperature was below absolute zero or not a number.
    #[error("invalid temperature: {0}")]
    InvalidTemperature(#[from] ConstraintError),

    /// The underlying fill was rejected.
    #[error("fill rejected")]
    Fill(#[from] FillError),
}
