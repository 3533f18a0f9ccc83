//! # Sheet Client
//!
//! A high-level API over `ResourceClient<Sheet>`: one method per form event.

use crate::estimator::{Estimate, RoomField, RoomInput};
use crate::framework::{ActorClient, ResourceClient};
use crate::model::{Sheet, SheetCreate, SheetId, SheetUpdate};
use crate::sheet_actor::{SheetAction, SheetActionResult, SheetError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Sheet actor.
#[derive(Clone)]
pub struct SheetClient {
    inner: ResourceClient<Sheet>,
}

impl SheetClient {
    pub fn new(inner: ResourceClient<Sheet>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Sheet> for SheetClient {
    type Error = SheetError;

    fn inner(&self) -> &ResourceClient<Sheet> {
        &self.inner
    }
}

impl SheetClient {
    #[instrument(skip(self))]
    pub async fn create_sheet(&self, params: SheetCreate) -> Result<SheetId, SheetError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// Replaces both ratio fields. Results are not recomputed.
    #[instrument(skip(self))]
    pub async fn set_ratio(
        &self,
        id: SheetId,
        cement: &str,
        sand: &str,
    ) -> Result<Sheet, SheetError> {
        let update = SheetUpdate {
            cement_ratio: Some(cement.to_string()),
            sand_ratio: Some(sand.to_string()),
        };
        self.update_sheet(id, update).await
    }

    #[instrument(skip(self))]
    pub async fn update_sheet(&self, id: SheetId, update: SheetUpdate) -> Result<Sheet, SheetError> {
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?)
    }

    /// Replaces the room list with blank rooms. Returns the new count.
    #[instrument(skip(self))]
    pub async fn set_room_count(&self, id: SheetId, raw: &str) -> Result<usize, SheetError> {
        debug!("Resizing room list");
        match self.action(id, SheetAction::SetRoomCount(raw.to_string())).await? {
            SheetActionResult::RoomCount(count) => Ok(count),
            _ => unreachable!("SetRoomCount action must return RoomCount result"),
        }
    }

    /// Replaces one field of one room. Returns the edited room.
    #[instrument(skip(self))]
    pub async fn edit_room(
        &self,
        id: SheetId,
        index: usize,
        field: RoomField,
        value: &str,
    ) -> Result<RoomInput, SheetError> {
        let action = SheetAction::EditRoom {
            index,
            field,
            value: value.to_string(),
        };
        match self.action(id, action).await? {
            SheetActionResult::RoomEdited(room) => Ok(room),
            _ => unreachable!("EditRoom action must return RoomEdited result"),
        }
    }

    /// Runs the calculation.
    ///
    /// `Ok(None)` means the ratio was declined and the sheet kept its previous results.
    #[instrument(skip(self))]
    pub async fn calculate(&self, id: SheetId) -> Result<Option<Estimate>, SheetError> {
        debug!("Calculating");
        match self.action(id, SheetAction::Calculate).await? {
            SheetActionResult::Computed(estimate) => Ok(Some(estimate)),
            SheetActionResult::Declined => Ok(None),
            _ => unreachable!("Calculate action must return Computed or Declined"),
        }
    }

    /// The results currently held by the sheet, with their totals.
    #[instrument(skip(self))]
    pub async fn estimate(&self, id: SheetId) -> Result<Estimate, SheetError> {
        let sheet = self
            .get(id.clone())
            .await?
            .ok_or_else(|| SheetError::NotFound(id.to_string()))?;
        Ok(sheet.estimate())
    }

    async fn action(&self, id: SheetId, action: SheetAction) -> Result<SheetActionResult, SheetError> {
        Ok(self.inner.perform_action(id, action).await?)
    }
}
