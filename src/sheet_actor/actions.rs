//! Custom actions for the Sheet actor.
//!
//! These are the form events beyond plain ratio updates: resizing the room list,
//! editing one room field, and running the calculation. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::estimator::{Estimate, RoomField, RoomInput};

/// Custom actions for Sheet entities.
#[derive(Debug, Clone)]
pub enum SheetAction {
    /// Replaces the room list with that many blank rooms.
    ///
    /// The raw count is read like the form's number field; see
    /// [`parse_room_count`](crate::model::parse_room_count).
    ///
    /// # Errors
    /// Fails if the count exceeds the configured room limit.
    SetRoomCount(String),
    /// Replaces one field of one room.
    ///
    /// # Errors
    /// Fails if `index` is out of range.
    EditRoom {
        index: usize,
        field: RoomField,
        value: String,
    },
    /// Recomputes every room from the current ratio and room list.
    Calculate,
}

/// Results from SheetActions.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetActionResult {
    /// New room count after `SetRoomCount`.
    RoomCount(usize),
    /// The room as it reads after `EditRoom`.
    RoomEdited(RoomInput),
    /// `Calculate` accepted the ratio; results were replaced.
    Computed(Estimate),
    /// `Calculate` declined the ratio; previous results are untouched.
    Declined,
}
