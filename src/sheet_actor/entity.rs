//! ActorEntity trait implementation for the [`Sheet`] model type.
//!
//! Ratio edits arrive as updates; room-list edits and calculation arrive as
//! [`SheetAction`]s. None of them recompute results except `Calculate`.

use super::actions::{SheetAction, SheetActionResult};
use super::error::SheetError;
use super::SheetContext;
use crate::framework::ActorEntity;
use crate::model::{parse_room_count, Sheet, SheetCreate, SheetId, SheetUpdate};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Sheet {
    type Id = SheetId;
    type Create = SheetCreate;
    type Update = SheetUpdate;
    type Action = SheetAction;
    type ActionResult = SheetActionResult;
    type Context = SheetContext;
    type Error = SheetError;

    fn from_create_params(id: SheetId, params: SheetCreate) -> Result<Self, SheetError> {
        Ok(Self::new(id, params.cement_ratio, params.sand_ratio, params.rooms))
    }

    /// Rejects sheets created with more rooms than the configured limit.
    async fn on_create(&mut self, ctx: &SheetContext) -> Result<(), SheetError> {
        ctx.check_room_count(self.rooms.len())
    }

    /// Replaces the ratio fields that are present.
    async fn on_update(&mut self, update: SheetUpdate, _ctx: &SheetContext) -> Result<(), SheetError> {
        if let Some(cement) = update.cement_ratio {
            self.cement_ratio = cement;
        }
        if let Some(sand) = update.sand_ratio {
            self.sand_ratio = sand;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SheetAction,
        ctx: &SheetContext,
    ) -> Result<SheetActionResult, SheetError> {
        match action {
            SheetAction::SetRoomCount(raw) => {
                let count = parse_room_count(&raw);
                ctx.check_room_count(count)?;
                self.reset_rooms(count);
                Ok(SheetActionResult::RoomCount(count))
            }
            SheetAction::EditRoom { index, field, value } => {
                let len = self.rooms.len();
                self.edit_room(index, field, value)
                    .cloned()
                    .map(SheetActionResult::RoomEdited)
                    .ok_or(SheetError::RoomOutOfRange { index, len })
            }
            SheetAction::Calculate => match self.calculate() {
                Some(estimate) => Ok(SheetActionResult::Computed(estimate)),
                None => {
                    debug!(sheet = %self.id, results = self.results.len(), "Keeping previous results");
                    Ok(SheetActionResult::Declined)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{RoomField, RoomInput};

    fn ctx() -> SheetContext {
        SheetContext { max_rooms: 4 }
    }

    fn sheet() -> Sheet {
        Sheet::from_create_params(
            SheetId(1),
            SheetCreate {
                cement_ratio: "1".into(),
                sand_ratio: "4".into(),
                rooms: vec![],
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_set_room_count_resets_rooms() {
        let mut sheet = sheet();
        let result = sheet
            .handle_action(SheetAction::SetRoomCount("2".into()), &ctx())
            .await
            .unwrap();
        assert_eq!(result, SheetActionResult::RoomCount(2));
        assert_eq!(sheet.rooms, vec![RoomInput::default(); 2]);

        let result = sheet
            .handle_action(SheetAction::SetRoomCount(String::new()), &ctx())
            .await
            .unwrap();
        assert_eq!(result, SheetActionResult::RoomCount(0));
        assert!(sheet.rooms.is_empty());
    }

    #[tokio::test]
    async fn test_room_limit_leaves_sheet_unchanged() {
        let mut sheet = sheet();
        sheet.reset_rooms(1);

        let err = sheet
            .handle_action(SheetAction::SetRoomCount("5".into()), &ctx())
            .await
            .unwrap_err();
        assert_eq!(err, SheetError::TooManyRooms { requested: 5, limit: 4 });
        assert_eq!(sheet.rooms.len(), 1);
    }

    #[tokio::test]
    async fn test_edit_out_of_range() {
        let mut sheet = sheet();
        let err = sheet
            .handle_action(
                SheetAction::EditRoom {
                    index: 0,
                    field: RoomField::Length,
                    value: "5".into(),
                },
                &ctx(),
            )
            .await
            .unwrap_err();
        assert_eq!(err, SheetError::RoomOutOfRange { index: 0, len: 0 });
    }

    #[tokio::test]
    async fn test_calculate_after_edits() {
        let mut sheet = sheet();
        sheet
            .handle_action(SheetAction::SetRoomCount("1".into()), &ctx())
            .await
            .unwrap();

        for (field, value) in [
            (RoomField::Name, "Lounge"),
            (RoomField::Length, "5"),
            (RoomField::Width, "4"),
            (RoomField::Height, "3"),
            (RoomField::Thickness, "0.15"),
        ] {
            sheet
                .handle_action(
                    SheetAction::EditRoom {
                        index: 0,
                        field,
                        value: value.into(),
                    },
                    &ctx(),
                )
                .await
                .unwrap();
        }

        let SheetActionResult::Computed(estimate) = sheet
            .handle_action(SheetAction::Calculate, &ctx())
            .await
            .unwrap()
        else {
            panic!("Expected Computed");
        };
        assert_eq!(estimate.results[0].room.name, "Lounge");
        assert_eq!(estimate.results[0].cement_quantity.to_string(), "1.68");
        assert_eq!(sheet.results, estimate.results);
    }

    #[tokio::test]
    async fn test_ratio_update_does_not_recompute() {
        let mut sheet = sheet();
        sheet.rooms = vec![RoomInput::new("A", 5, 4, 3, 0.15)];
        sheet.handle_action(SheetAction::Calculate, &ctx()).await.unwrap();
        let before = sheet.results.clone();

        let update = SheetUpdate {
            cement_ratio: Some("0".into()),
            sand_ratio: Some("0".into()),
        };
        sheet.on_update(update, &ctx()).await.unwrap();
        assert_eq!(sheet.results, before);

        let result = sheet.handle_action(SheetAction::Calculate, &ctx()).await.unwrap();
        assert_eq!(result, SheetActionResult::Declined);
        assert_eq!(sheet.results, before);
    }

    #[tokio::test]
    async fn test_create_over_limit_is_rejected() {
        let mut sheet = sheet();
        sheet.rooms = vec![RoomInput::default(); 5];
        assert!(sheet.on_create(&ctx()).await.is_err());
    }
}
