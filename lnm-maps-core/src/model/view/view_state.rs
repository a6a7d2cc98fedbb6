use serde::{Deserialize, Serialize};

/// camera parameters governing the visible portion of the map.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

pub const DEFAULT_LONGITUDE: f64 = 75.9235;
pub const DEFAULT_LATITUDE: f64 = 26.9363;
pub const DEFAULT_ZOOM: f64 = 16.5;
/// zoom range supported by the vector tile styles
pub const MAX_ZOOM: f64 = 24.0;

impl Default for ViewState {
    fn default() -> Self {
        Self {
            longitude: DEFAULT_LONGITUDE,
            latitude: DEFAULT_LATITUDE,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl ViewState {
    pub fn new(longitude: f64, latitude: f64, zoom: f64) -> ViewState {
        ViewState {
            longitude,
            latitude,
            zoom,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let ViewState {
            longitude,
            latitude,
            zoom,
        } = self;
        if !(-180.0..=180.0).contains(longitude) {
            Err(format!("camera longitude {longitude} outside of range [-180, 180]"))
        } else if !(-90.0..=90.0).contains(latitude) {
            Err(format!("camera latitude {latitude} outside of range [-90, 90]"))
        } else if !(0.0..=MAX_ZOOM).contains(zoom) {
            Err(format!("camera zoom {zoom} outside of range [0, {MAX_ZOOM}]"))
        } else {
            Ok(())
        }
    }
}
