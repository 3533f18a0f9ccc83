//! Error types for the estimator.
//!
//! These never escape [`calculate`](super::calculate): an invalid ratio declines the
//! whole run and an invalid room degrades to the zero result. They exist so the
//! parsing boundary stays typed and so the degradation can be logged with context.

use super::RoomField;
use thiserror::Error;

/// Reasons a value could not be used in a calculation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EstimateError {
    /// The cement:sand ratio is unparseable, non-finite, or its parts do not sum above zero.
    #[error("Invalid mix ratio: cement {cement:?}, sand {sand:?}")]
    InvalidRatio { cement: String, sand: String },

    /// One room dimension is not a finite number.
    #[error("Invalid room geometry: {field} = {value:?}")]
    InvalidRoomGeometry { field: RoomField, value: String },
}
