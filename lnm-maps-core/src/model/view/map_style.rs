use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// base map style offered by the style toggle. names are read
/// case-insensitively wherever a style is deserialized.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "String")]
pub enum MapStyle {
    #[default]
    Satellite,
    Street,
}

impl MapStyle {
    /// style identifier consumed by the map rendering library
    pub fn style_url(&self) -> &'static str {
        match self {
            MapStyle::Satellite => "mapbox://styles/mapbox/satellite-streets-v12",
            MapStyle::Street => "mapbox://styles/mapbox/outdoors-v12",
        }
    }
}

impl Display for MapStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MapStyle::Satellite => "Satellite",
            MapStyle::Street => "Street",
        };
        write!(f, "{s}")
    }
}

impl FromStr for MapStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "satellite" => Ok(MapStyle::Satellite),
            "street" => Ok(MapStyle::Street),
            other => Err(format!(
                "unknown map style '{other}', expected one of [Satellite, Street]"
            )),
        }
    }
}

impl TryFrom<String> for MapStyle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MapStyle::from_str(&value)
    }
}
