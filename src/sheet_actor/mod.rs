//! # Sheet Actor
//!
//! Owns calculation sheets and applies form events to them one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Sheet`]
//! - [`error`] - [`SheetError`]
//! - [`actions`] - [`SheetAction`] and [`SheetActionResult`]
//! - [`new()`] - factory for the actor and its [`SheetClient`]
//!
//! ## Usage
//!
//! ```rust
//! use mortar_calc::estimator::RoomInput;
//! use mortar_calc::model::SheetCreate;
//! use mortar_calc::sheet_actor::{self, SheetContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = sheet_actor::new(32);
//!     tokio::spawn(actor.run(SheetContext::default()));
//!
//!     let id = client
//!         .create_sheet(SheetCreate {
//!             cement_ratio: "1".into(),
//!             sand_ratio: "4".into(),
//!             rooms: vec![RoomInput::new("Hall", 5, 4, 3, 0.15)],
//!         })
//!         .await?;
//!
//!     let estimate = client.calculate(id).await?.expect("ratio is valid");
//!     assert_eq!(estimate.totals.sand_quantity.to_string(), "8.42");
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::SheetClient;
use crate::framework::ResourceActor;
use crate::model::Sheet;

/// Room limit used when none is configured.
pub const DEFAULT_MAX_ROOMS: usize = 500;

/// Dependencies injected into every Sheet hook.
#[derive(Debug, Clone)]
pub struct SheetContext {
    /// Largest room list a sheet may hold.
    pub max_rooms: usize,
}

impl SheetContext {
    fn check_room_count(&self, requested: usize) -> Result<(), SheetError> {
        if requested > self.max_rooms {
            return Err(SheetError::TooManyRooms {
                requested,
                limit: self.max_rooms,
            });
        }
        Ok(())
    }
}

impl Default for SheetContext {
    fn default() -> Self {
        Self {
            max_rooms: DEFAULT_MAX_ROOMS,
        }
    }
}

/// Creates a new Sheet actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Sheet>, SheetClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, SheetClient::new(generic_client))
}
