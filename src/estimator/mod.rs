//! # Mortar Estimator
//!
//! Turns a cement:sand mix ratio and a list of rectangular rooms into plaster
//! material quantities.
//!
//! ## Formula
//!
//! For a room of length `L`, width `W`, height `H` and plaster thickness `T`
//! (all metres) and a ratio `C:S`:
//!
//! ```text
//! V          = 2 × (L + W) × H × T          wall volume, m³
//! V_adjusted = V × 1.3                       30% waste margin
//! cement     = V_adjusted / (C + S) × C / 1.25   bags
//! sand       = V_adjusted / (C + S) × S          m³
//! ```
//!
//! Everything is computed at full precision and rounded to two decimals only when
//! stored in a [`RoomResult`]. Totals sum the rounded room values.
//!
//! ## Failure handling
//!
//! Nothing here returns an error to the caller:
//! - an unusable ratio makes [`calculate`] return `None` (the run is declined);
//! - an unusable room becomes [`RoomResult::zero`] and its siblings compute normally.
//!
//! ## Usage
//!
//! ```rust
//! use mortar_calc::estimator::{calculate, RoomInput};
//!
//! let rooms = vec![RoomInput::new("Kitchen", 5, 4, 3, 0.15)];
//! let estimate = calculate("1", "4", &rooms).unwrap();
//!
//! assert_eq!(estimate.results[0].wall_volume.to_string(), "8.10");
//! assert_eq!(estimate.results[0].cement_quantity.to_string(), "1.68");
//! assert_eq!(estimate.results[0].sand_quantity.to_string(), "8.42");
//! ```

pub mod error;
pub mod ratio;
pub mod result;
pub mod room;

pub use error::*;
pub use ratio::*;
pub use result::*;
pub use room::*;

use tracing::{debug, warn};

/// Overage applied to the wall volume for material lost during application.
pub const WASTE_MARGIN: f64 = 1.3;

/// Volume share of cement per bag.
pub const BAG_VOLUME_DIVISOR: f64 = 1.25;

/// Parses one form field as a finite decimal number.
///
/// Surrounding whitespace is ignored. Empty text, `NaN` and infinities are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Returns true iff both parts parse to finite numbers summing above zero.
pub fn validate_ratio(cement: &str, sand: &str) -> bool {
    MixRatio::parse(cement, sand).is_ok()
}

/// Estimates materials for one room.
///
/// A room whose geometry does not fully parse, or whose dimensions are so large
/// that the arithmetic overflows, yields [`RoomResult::zero`].
pub fn compute_room(room: &RoomInput, ratio: &MixRatio) -> RoomResult {
    let dims = match room.dimensions() {
        Ok(dims) => dims,
        Err(e) => {
            debug!(room = %room.name, error = %e, "Room degraded to zero result");
            return RoomResult::zero(room.clone());
        }
    };

    let volume = dims.wall_volume();
    let share = volume * WASTE_MARGIN / ratio.total_parts();
    let cement = share * (ratio.cement() / BAG_VOLUME_DIVISOR);
    let sand = share * ratio.sand();

    if ![volume, cement, sand].iter().all(|v| v.is_finite()) {
        debug!(room = %room.name, volume, "Room overflowed, degraded to zero result");
        return RoomResult::zero(room.clone());
    }

    RoomResult {
        room: room.clone(),
        wall_volume: Quantity::round(volume),
        cement_quantity: Quantity::round(cement),
        sand_quantity: Quantity::round(sand),
    }
}

/// Estimates every room independently, preserving input order.
pub fn compute_batch(rooms: &[RoomInput], ratio: &MixRatio) -> Vec<RoomResult> {
    rooms.iter().map(|room| compute_room(room, ratio)).collect()
}

/// Sums the rounded room values column by column.
pub fn compute_totals(results: &[RoomResult]) -> Totals {
    let sum = |pick: fn(&RoomResult) -> Quantity| {
        Quantity::round(results.iter().map(|r| pick(r).value()).sum())
    };

    Totals {
        wall_volume: sum(|r| r.wall_volume),
        cement_quantity: sum(|r| r.cement_quantity),
        sand_quantity: sum(|r| r.sand_quantity),
    }
}

/// Runs one full calculation from raw form values.
///
/// Returns `None` when the ratio is unusable; the caller keeps whatever it was
/// showing before. An empty room list is a valid run with zero totals.
pub fn calculate(cement: &str, sand: &str, rooms: &[RoomInput]) -> Option<Estimate> {
    let ratio = match MixRatio::parse(cement, sand) {
        Ok(ratio) => ratio,
        Err(e) => {
            warn!(error = %e, "Calculation declined");
            return None;
        }
    };

    let results = compute_batch(rooms, &ratio);
    let totals = compute_totals(&results);
    debug!(rooms = results.len(), ?totals, "Calculated");
    Some(Estimate { results, totals })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(c: f64, s: f64) -> MixRatio {
        MixRatio::new(c, s).unwrap()
    }

    fn room(l: f64, w: f64, h: f64, t: f64) -> RoomInput {
        RoomInput::new("Room", l, w, h, t)
    }

    #[test]
    fn test_reference_room_one_to_four() {
        let estimate = calculate("1", "4", &[room(5.0, 4.0, 3.0, 0.15)]).unwrap();
        let result = &estimate.results[0];

        // V = 2 * 9 * 3 * 0.15 = 8.1, adjusted 10.53
        assert_eq!(result.wall_volume.to_string(), "8.10");
        // 10.53 / 5 / 1.25 = 1.6848
        assert_eq!(result.cement_quantity.to_string(), "1.68");
        // 10.53 / 5 * 4 = 8.424
        assert_eq!(result.sand_quantity.to_string(), "8.42");
        assert_eq!(result.room.name, "Room");
    }

    #[test]
    fn test_validate_ratio() {
        assert!(validate_ratio("1", "4"));
        assert!(validate_ratio(" 1.5 ", "6"));
        assert!(validate_ratio("0", "1"));
        assert!(validate_ratio("1", "0"));
        assert!(!validate_ratio("0", "0"));
        assert!(!validate_ratio("", "4"));
        assert!(!validate_ratio("1", "abc"));
        assert!(!validate_ratio("inf", "1"));
        assert!(!validate_ratio("NaN", "1"));
        assert!(!validate_ratio("-2", "1"));
    }

    #[test]
    fn test_zero_ratio_declines_without_results() {
        assert_eq!(calculate("0", "0", &[room(5.0, 4.0, 3.0, 0.15)]), None);
        assert_eq!(calculate("", "", &[]), None);
    }

    #[test]
    fn test_empty_room_list_yields_zero_totals() {
        let estimate = calculate("1", "3", &[]).unwrap();
        assert!(estimate.results.is_empty());
        assert_eq!(estimate.totals, Totals::default());
        assert_eq!(estimate.totals.wall_volume.to_string(), "0.00");
    }

    #[test]
    fn test_bad_room_degrades_alone() {
        let mut bad = room(5.0, 4.0, 3.0, 0.15);
        bad.length = String::new();
        let rooms = vec![room(5.0, 4.0, 3.0, 0.15), bad.clone(), room(2.0, 2.0, 2.0, 0.1)];

        let estimate = calculate("1", "4", &rooms).unwrap();
        assert_eq!(estimate.results.len(), 3);

        let degraded = &estimate.results[1];
        assert!(degraded.is_zero());
        assert_eq!(degraded.room, bad);
        assert_eq!(degraded.wall_volume.to_string(), "0");
        assert_eq!(degraded.cement_quantity.to_string(), "0");
        assert_eq!(degraded.sand_quantity.to_string(), "0");

        assert_eq!(estimate.results[0].wall_volume.to_string(), "8.10");
        // 2 * 4 * 2 * 0.1
        assert_eq!(estimate.results[2].wall_volume.to_string(), "1.60");
    }

    #[test]
    fn test_dimensions_reports_first_bad_field() {
        let input = RoomInput::new("Hall", "3", "x", "2.5", "");
        let err = input.dimensions().unwrap_err();
        assert_eq!(
            err,
            EstimateError::InvalidRoomGeometry {
                field: RoomField::Width,
                value: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_infinite_dimension_is_rejected() {
        let input = RoomInput::new("Hall", "inf", "3", "2.5", "0.1");
        assert!(compute_room(&input, &ratio(1.0, 4.0)).is_zero());
    }

    #[test]
    fn test_computed_materials_keep_the_mix_proportion() {
        // 2 * 35 * 3 * 0.2 = 42 m³, adjusted 54.6, split over 7 parts
        let result = compute_room(&room(20.0, 15.0, 3.0, 0.2), &ratio(1.0, 6.0));
        assert_eq!(result.cement_quantity.to_string(), "6.24");
        assert_eq!(result.sand_quantity.to_string(), "46.80");

        let cement_volume = result.cement_quantity.value() * BAG_VOLUME_DIVISOR;
        let proportion = cement_volume / result.sand_quantity.value();
        assert!((proportion - 1.0 / 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_thin_plaster_rounds_like_the_form() {
        let rooms = [RoomInput::new("Store", "2.5", "2", "3", "0.015")];
        let estimate = calculate("1", "4", &rooms).unwrap();
        assert_eq!(estimate.results[0].wall_volume.to_string(), "0.40");
        assert_eq!(estimate.totals.wall_volume.to_string(), "0.40");
    }

    #[test]
    fn test_overflowing_room_degrades_to_zero() {
        let huge = RoomInput::new("Huge", "1e200", "1", "1e200", "1");
        let rooms = [huge, room(5.0, 4.0, 3.0, 0.15)];

        for (c, s) in [("1", "4"), ("0", "1")] {
            let estimate = calculate(c, s, &rooms).unwrap();
            assert!(estimate.results[0].is_zero());
            assert!(!estimate.totals.wall_volume.to_string().contains("inf"));
            assert_eq!(estimate.totals.wall_volume.to_string(), "8.10");
        }
    }

    #[test]
    fn test_negative_geometry_never_shows_negative_zero() {
        let input = RoomInput::new("Odd", "-5", "1", "3", "0.15");
        let result = compute_room(&input, &ratio(1.0, 0.0));
        assert_eq!(result.sand_quantity.to_string(), "0.00");
        assert!(result.wall_volume.to_string().starts_with('-'));
    }

    #[test]
    fn test_ratio_change_redistributes_fixed_volume() {
        let input = room(6.0, 5.0, 3.0, 0.02);
        let volume = input.dimensions().unwrap().wall_volume() * WASTE_MARGIN;

        for (c, s) in [(1.0, 3.0), (1.0, 4.0), (1.0, 6.0), (2.0, 5.0)] {
            let result = compute_room(&input, &ratio(c, s));
            let cement_volume = result.cement_quantity.value() * BAG_VOLUME_DIVISOR;
            let total = cement_volume + result.sand_quantity.value();
            assert!((total - volume).abs() < 0.02, "ratio {c}:{s} gave {total}");
        }
    }

    #[test]
    fn test_single_material_ratios() {
        let input = room(5.0, 4.0, 3.0, 0.15);

        let sand_only = compute_room(&input, &ratio(0.0, 1.0));
        assert_eq!(sand_only.cement_quantity, Quantity::Rounded(0.0));
        assert_eq!(sand_only.sand_quantity.to_string(), "10.53");

        let cement_only = compute_room(&input, &ratio(1.0, 0.0));
        assert_eq!(cement_only.sand_quantity, Quantity::Rounded(0.0));
        // 10.53 / 1.25
        assert_eq!(cement_only.cement_quantity.to_string(), "8.42");
    }

    #[test]
    fn test_wall_volume_increases_with_each_dimension() {
        let base = Dimensions {
            length: 4.0,
            width: 3.0,
            height: 2.5,
            thickness: 0.1,
        };
        let v = base.wall_volume();

        assert!(Dimensions { length: 4.5, ..base }.wall_volume() > v);
        assert!(Dimensions { width: 3.5, ..base }.wall_volume() > v);
        assert!(Dimensions { height: 3.0, ..base }.wall_volume() > v);
        assert!(Dimensions { thickness: 0.2, ..base }.wall_volume() > v);
    }

    #[test]
    fn test_batch_preserves_order() {
        let rooms: Vec<RoomInput> = (1..=5)
            .map(|i| RoomInput::new(format!("R{i}"), i, 1, 1, 0.1))
            .collect();
        let results = compute_batch(&rooms, &ratio(1.0, 4.0));
        let names: Vec<&str> = results.iter().map(|r| r.room.name.as_str()).collect();
        assert_eq!(names, ["R1", "R2", "R3", "R4", "R5"]);
    }

    #[test]
    fn test_totals_sum_rounded_room_values() {
        let rooms = vec![
            room(5.0, 4.0, 3.0, 0.15),
            room(3.333, 2.111, 2.7, 0.013),
            RoomInput::new("Blank", "", "", "", ""),
        ];
        let estimate = calculate("1", "4", &rooms).unwrap();

        let by_hand: f64 = estimate.results.iter().map(|r| r.cement_quantity.value()).sum();
        assert!((estimate.totals.cement_quantity.value() - by_hand).abs() <= 0.01);

        let by_hand: f64 = estimate.results.iter().map(|r| r.wall_volume.value()).sum();
        assert!((estimate.totals.wall_volume.value() - by_hand).abs() <= 0.01);
    }

    #[test]
    fn test_rendered_table_has_total_row() {
        let estimate = calculate("1", "4", &[room(5.0, 4.0, 3.0, 0.15)]).unwrap();
        let table = estimate.to_string();
        let last = table.lines().last().unwrap();
        assert!(last.starts_with("Total:"));
        assert!(last.contains("8.10"));
        assert!(last.contains("1.68"));
        assert!(last.contains("8.42"));
    }

    #[test]
    fn test_serializes_with_form_field_names() {
        let estimate = calculate("1", "4", &[room(5.0, 4.0, 3.0, 0.15)]).unwrap();
        let json = serde_json::to_value(&estimate).unwrap();

        let first = &json["results"][0];
        assert_eq!(first["name"], "Room");
        assert_eq!(first["length"], "5");
        assert_eq!(first["wallVolume"], "8.10");
        assert_eq!(first["cementQuantity"], "1.68");
        assert_eq!(first["sandQuantity"], "8.42");
        assert_eq!(json["totals"]["sandQuantity"], "8.42");
    }
}
