use serde::{Deserialize, Serialize};

/// a WGS84 location as stored in the place table. the field names match
/// the keys of the place table JSON file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// confirms the coordinate is finite and within the valid lat/lon domain.
    ///
    /// # Returns
    ///
    /// * a description of the problem if the coordinate is invalid
    pub fn validate(&self) -> Result<(), String> {
        let Coordinate {
            latitude,
            longitude,
        } = self;
        if !latitude.is_finite() || !longitude.is_finite() {
            Err(format!(
                "coordinate ({latitude}, {longitude}) is not a finite number"
            ))
        } else if !(-90.0..=90.0).contains(latitude) {
            Err(format!("latitude {latitude} outside of range [-90, 90]"))
        } else if !(-180.0..=180.0).contains(longitude) {
            Err(format!("longitude {longitude} outside of range [-180, 180]"))
        } else {
            Ok(())
        }
    }
}
