//! The calculation sheet resource.

use crate::estimator::{self, Estimate, RoomField, RoomInput, RoomResult, Totals};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Sheets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetId(pub u32);

impl From<u32> for SheetId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SheetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sheet_{}", self.0)
    }
}

/// A calculation sheet: the ratio and rooms typed into the form, plus the last
/// results computed from them.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Sheet`](#impl-ActorEntity-for-Sheet) for details on:
/// - Creation parameters ([`SheetCreate`])
/// - Update parameters ([`SheetUpdate`])
/// - Custom actions ([`SheetAction`](crate::sheet_actor::SheetAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub id: SheetId,
    pub cement_ratio: String,
    pub sand_ratio: String,
    pub rooms: Vec<RoomInput>,
    /// Results of the last accepted calculation. Not recomputed on edits.
    pub results: Vec<RoomResult>,
}

impl Sheet {
    /// Creates a sheet with no results yet.
    pub fn new(
        id: SheetId,
        cement_ratio: impl Into<String>,
        sand_ratio: impl Into<String>,
        rooms: Vec<RoomInput>,
    ) -> Self {
        Self {
            id,
            cement_ratio: cement_ratio.into(),
            sand_ratio: sand_ratio.into(),
            rooms,
            results: Vec::new(),
        }
    }

    /// Totals over the stored results, derived on every call.
    pub fn totals(&self) -> Totals {
        estimator::compute_totals(&self.results)
    }

    /// The stored results together with their totals.
    pub fn estimate(&self) -> Estimate {
        Estimate {
            results: self.results.clone(),
            totals: self.totals(),
        }
    }

    /// Replaces the room list with `count` blank rooms.
    pub fn reset_rooms(&mut self, count: usize) {
        self.rooms = vec![RoomInput::default(); count];
    }

    /// Replaces one field of one room. Returns the edited room, or `None` when
    /// `index` is out of range.
    pub fn edit_room(&mut self, index: usize, field: RoomField, value: String) -> Option<&RoomInput> {
        let slot = self.rooms.get_mut(index)?;
        *slot = slot.with_field(field, value);
        Some(&*slot)
    }

    /// Recalculates from the current inputs.
    ///
    /// When the ratio is declined the previous results stay in place and `None`
    /// is returned.
    pub fn calculate(&mut self) -> Option<Estimate> {
        let estimate = estimator::calculate(&self.cement_ratio, &self.sand_ratio, &self.rooms)?;
        self.results = estimate.results.clone();
        Some(estimate)
    }
}

/// Payload for creating a new sheet.
#[derive(Debug, Clone, Default)]
pub struct SheetCreate {
    pub cement_ratio: String,
    pub sand_ratio: String,
    pub rooms: Vec<RoomInput>,
}

/// Payload for updating the ratio fields of a sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetUpdate {
    pub cement_ratio: Option<String>,
    pub sand_ratio: Option<String>,
}

/// Reads a room count the way the form's number field does.
///
/// Leading whitespace and an optional sign are skipped, then the leading run of
/// digits is the count: `"3.7"` is 3 and `"1e3"` is 1. No digits, or a negative
/// count, is zero.
pub fn parse_room_count(raw: &str) -> usize {
    let text = raw.trim_start();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() || negative {
        return 0;
    }
    digits.parse().unwrap_or(usize::MAX)
}
