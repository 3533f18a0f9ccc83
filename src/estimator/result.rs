use super::RoomInput;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;

/// A presentation quantity.
///
/// `Zero` is the soft-failure value of a room whose geometry did not parse and
/// renders as `"0"`. `Rounded` holds a value already rounded to two decimals and
/// renders with exactly two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Quantity {
    #[default]
    Zero,
    Rounded(f64),
}

impl Quantity {
    /// Rounds a full-precision value to two decimals, half away from zero.
    ///
    /// The tie is judged on the exact binary value, so `0.40499999999999997`
    /// (the nearest `f64` to 0.405) rounds down while an exact `0.125` rounds
    /// up. Non-finite input yields [`Quantity::Zero`]; `-0.0` never survives.
    pub fn round(value: f64) -> Self {
        if !value.is_finite() {
            return Quantity::Zero;
        }
        Quantity::Rounded(round_cents(value))
    }

    pub fn value(&self) -> f64 {
        match self {
            Quantity::Zero => 0.0,
            Quantity::Rounded(v) => *v,
        }
    }
}

fn round_cents(value: f64) -> f64 {
    let precision = exact_fraction_digits(value).max(3);
    let text = format!("{:.precision$}", value.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "000"));
    let round_up = fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5');

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(2)).collect();
    if round_up {
        increment(&mut digits);
    }

    let digits: String = digits.into_iter().map(char::from).collect();
    let (whole, cents) = digits.split_at(digits.len() - 2);
    let magnitude: f64 = format!("{whole}.{cents}").parse().unwrap_or(0.0);
    if value < 0.0 && magnitude != 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Number of digits after the point in the exact decimal expansion of `value`.
fn exact_fraction_digits(value: f64) -> usize {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return 0;
    }

    let exponent = exponent + mantissa.trailing_zeros() as i32;
    if exponent >= 0 {
        0
    } else {
        exponent.unsigned_abs() as usize
    }
}

/// Adds one unit in the last place to a string of ASCII digits.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Zero => f.write_str("0"),
            Quantity::Rounded(v) => write!(f, "{v:.2}"),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reads back what `Serialize` wrote: `"0"` is the zero result, anything else
/// is a finite number and is re-rounded to two decimals.
impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        if raw == "0" {
            return Ok(Quantity::Zero);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Quantity::Rounded(round_cents(v))),
            _ => Err(serde::de::Error::custom(format!("invalid quantity {raw:?}"))),
        }
    }
}

/// A room echoed back with its material estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResult {
    #[serde(flatten)]
    pub room: RoomInput,
    /// Wall volume in m³.
    pub wall_volume: Quantity,
    /// Cement in bags.
    pub cement_quantity: Quantity,
    /// Sand in m³.
    pub sand_quantity: Quantity,
}

impl RoomResult {
    /// The zero result: every quantity is [`Quantity::Zero`].
    pub fn zero(room: RoomInput) -> Self {
        Self {
            room,
            wall_volume: Quantity::Zero,
            cement_quantity: Quantity::Zero,
            sand_quantity: Quantity::Zero,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.wall_volume == Quantity::Zero
            && self.cement_quantity == Quantity::Zero
            && self.sand_quantity == Quantity::Zero
    }
}

/// Column sums over one run's results, each rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub wall_volume: Quantity,
    pub cement_quantity: Quantity,
    pub sand_quantity: Quantity,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            wall_volume: Quantity::Rounded(0.0),
            cement_quantity: Quantity::Rounded(0.0),
            sand_quantity: Quantity::Rounded(0.0),
        }
    }
}

/// Output of one successful calculation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Estimate {
    pub results: Vec<RoomResult>,
    pub totals: Totals,
}

impl Display for Estimate {
    /// Renders the results table: one row per room and a total row.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_width = self
            .results
            .iter()
            .map(|r| r.room.name.chars().count())
            .chain(std::iter::once("Room Name".len()))
            .max()
            .unwrap_or_default();

        writeln!(
            f,
            "{:<name_width$}  {:>16}  {:>22}  {:>18}",
            "Room Name", "Wall Volume (m³)", "Cement Quantity (bags)", "Sand Quantity (m³)"
        )?;
        for result in &self.results {
            writeln!(
                f,
                "{:<name_width$}  {:>16}  {:>22}  {:>18}",
                result.room.name,
                result.wall_volume.to_string(),
                result.cement_quantity.to_string(),
                result.sand_quantity.to_string()
            )?;
        }
        write!(
            f,
            "{:<name_width$}  {:>16}  {:>22}  {:>18}",
            "Total:",
            self.totals.wall_volume.to_string(),
            self.totals.cement_quantity.to_string(),
            self.totals.sand_quantity.to_string()
        )
    }
}
