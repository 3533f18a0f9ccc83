use super::{parse_number, EstimateError};

/// Cement:sand mix ratio by volume parts, shared by every room in a run.
///
/// A `MixRatio` can only be built when both parts are finite and their sum is
/// strictly positive, so dividing by [`MixRatio::total_parts`] is always safe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixRatio {
    cement: f64,
    sand: f64,
}

impl MixRatio {
    pub fn new(cement: f64, sand: f64) -> Result<Self, EstimateError> {
        if cement.is_finite() && sand.is_finite() && cement + sand > 0.0 {
            Ok(Self { cement, sand })
        } else {
            Err(EstimateError::InvalidRatio {
                cement: cement.to_string(),
                sand: sand.to_string(),
            })
        }
    }

    /// Parses the two raw ratio fields from the form.
    pub fn parse(cement: &str, sand: &str) -> Result<Self, EstimateError> {
        let invalid = || EstimateError::InvalidRatio {
            cement: cement.to_string(),
            sand: sand.to_string(),
        };

        let c = parse_number(cement).ok_or_else(invalid)?;
        let s = parse_number(sand).ok_or_else(invalid)?;
        Self::new(c, s).map_err(|_| invalid())
    }

    pub fn cement(&self) -> f64 {
        self.cement
    }

    pub fn sand(&self) -> f64 {
        self.sand
    }

    pub fn total_parts(&self) -> f64 {
        self.cement + self.sand
    }
}
