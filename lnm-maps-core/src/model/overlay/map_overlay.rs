use serde::{Deserialize, Serialize};

use crate::model::view::{MapStyle, ViewState};

/// everything drawn over the base map for one state of the component.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapOverlay {
    pub view_state: ViewState,
    pub map_style: MapStyle,
    pub style_url: String,
    /// present only when both endpoints resolve to known places
    pub route_layer: Option<RouteLayer>,
    pub markers: Vec<Marker>,
    pub geolocate: GeolocateControl,
}

impl MapOverlay {
    pub fn marker(&self, role: MarkerRole) -> Option<&Marker> {
        self.markers.iter().find(|m| m.role == role)
    }
}

/// a GeoJSON source drawn as a single line layer
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteLayer {
    pub id: String,
    #[serde(rename = "type")]
    pub layer_type: String,
    pub layout: LineLayout,
    pub paint: LinePaint,
    pub data: geojson::Feature,
}

impl RouteLayer {
    /// the positions of the line geometry, if the feature holds a line string
    pub fn positions(&self) -> Option<&Vec<Vec<f64>>> {
        match self.data.geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::LineString(positions)) => Some(positions),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct LineLayout {
    pub line_join: String,
    pub line_cap: String,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            line_join: String::from("round"),
            line_cap: String::from("round"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct LinePaint {
    pub line_color: String,
    pub line_width: f64,
}

impl Default for LinePaint {
    fn default() -> Self {
        Self {
            line_color: String::from("rgba(3, 170, 238, 1)"),
            line_width: 5.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    Source,
    Destination,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Marker {
    pub role: MarkerRole,
    pub longitude: f64,
    pub latitude: f64,
    pub icon: MarkerIcon,
}

/// pixel size of the marker image
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerIcon {
    pub width: u32,
    pub height: u32,
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            width: 35,
            height: 40,
        }
    }
}

/// control that centers the map on the user's own location
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeolocateControl {
    pub position: String,
    pub enable_high_accuracy: bool,
    pub track_user_location: bool,
    pub show_user_heading: bool,
}

impl Default for GeolocateControl {
    fn default() -> Self {
        Self {
            position: String::from("top-right"),
            enable_high_accuracy: true,
            track_user_location: true,
            show_user_heading: true,
        }
    }
}
