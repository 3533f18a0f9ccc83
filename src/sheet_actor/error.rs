//! Error types for the Sheet actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during sheet operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SheetError {
    /// The requested sheet was not found.
    #[error("Sheet not found: {0}")]
    NotFound(String),

    /// A room edit addressed a room that does not exist.
    #[error("Room {index} out of range: sheet has {len} rooms")]
    RoomOutOfRange { index: usize, len: usize },

    /// The requested room count exceeds the configured limit.
    #[error("Too many rooms: requested {requested}, limit {limit}")]
    TooManyRooms { requested: usize, limit: usize },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Recovers the typed `SheetError` when the entity itself failed; everything
/// else is a communication failure.
impl From<FrameworkError> for SheetError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => SheetError::NotFound(id),
            FrameworkError::Entity(inner) => match inner.downcast::<SheetError>() {
                Ok(err) => *err,
                Err(other) => SheetError::ActorCommunicationError(other.to_string()),
            },
            other => SheetError::ActorCommunicationError(other.to_string()),
        }
    }
}
