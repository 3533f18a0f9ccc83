//! Raw room input as collected by the form, and its parsed geometry.

use super::{parse_number, EstimateError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One room as typed into the form. All fields are raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomInput {
    pub name: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub thickness: String,
}

impl RoomInput {
    /// Creates a room from anything that renders as text.
    ///
    /// # Arguments
    /// * `name` - Free-text label, may be empty
    /// * `length`, `width`, `height` - Metres
    /// * `thickness` - Plaster thickness in metres (e.g. `0.15`)
    pub fn new(
        name: impl Into<String>,
        length: impl Display,
        width: impl Display,
        height: impl Display,
        thickness: impl Display,
    ) -> Self {
        Self {
            name: name.into(),
            length: length.to_string(),
            width: width.to_string(),
            height: height.to_string(),
            thickness: thickness.to_string(),
        }
    }

    /// Returns the raw text of one field.
    pub fn field(&self, field: RoomField) -> &str {
        match field {
            RoomField::Name => &self.name,
            RoomField::Length => &self.length,
            RoomField::Width => &self.width,
            RoomField::Height => &self.height,
            RoomField::Thickness => &self.thickness,
        }
    }

    /// Returns a copy of this room with one field replaced.
    pub fn with_field(&self, field: RoomField, value: impl Into<String>) -> Self {
        let mut room = self.clone();
        let value = value.into();
        match field {
            RoomField::Name => room.name = value,
            RoomField::Length => room.length = value,
            RoomField::Width => room.width = value,
            RoomField::Height => room.height = value,
            RoomField::Thickness => room.thickness = value,
        }
        room
    }

    /// Parses the four numeric fields.
    ///
    /// Fails on the first field (in length, width, height, thickness order)
    /// that is not a finite number.
    pub fn dimensions(&self) -> Result<Dimensions, EstimateError> {
        let parse = |field: RoomField| {
            let raw = self.field(field);
            parse_number(raw).ok_or_else(|| EstimateError::InvalidRoomGeometry {
                field,
                value: raw.to_string(),
            })
        };

        Ok(Dimensions {
            length: parse(RoomField::Length)?,
            width: parse(RoomField::Width)?,
            height: parse(RoomField::Height)?,
            thickness: parse(RoomField::Thickness)?,
        })
    }
}

/// Names the editable fields of a [`RoomInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomField {
    Name,
    Length,
    Width,
    Height,
    Thickness,
}

impl Display for RoomField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoomField::Name => "name",
            RoomField::Length => "length",
            RoomField::Width => "width",
            RoomField::Height => "height",
            RoomField::Thickness => "thickness",
        };
        f.write_str(name)
    }
}

/// Parsed room geometry, all in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
}

impl Dimensions {
    /// Plaster volume of the four walls: perimeter × height × thickness.
    ///
    /// Openings and corner overlap are ignored.
    pub fn wall_volume(&self) -> f64 {
        2.0 * (self.length + self.width) * self.height * self.thickness
    }
}
