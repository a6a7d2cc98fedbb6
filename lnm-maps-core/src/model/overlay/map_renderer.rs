use geojson::{Feature, Geometry, JsonObject, Value};

use super::{
    map_page, AccessToken, GeolocateControl, LineLayout, LinePaint, MapOverlay, Marker,
    MarkerIcon, MarkerRole, OverlayError, RouteLayer,
};
use crate::model::{
    place::Coordinate,
    route::Route,
    view::{MapStyle, ViewState},
};

pub const ROUTE_LAYER_ID: &str = "route";

/// projects component state into map overlays. holds the tile provider
/// token so the page writer can authenticate the base map.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    access_token: AccessToken,
    line_layout: LineLayout,
    line_paint: LinePaint,
    marker_icon: MarkerIcon,
}

impl MapRenderer {
    pub fn new(access_token: AccessToken) -> Result<MapRenderer, OverlayError> {
        if access_token.is_empty() {
            return Err(OverlayError::MissingAccessToken);
        }
        Ok(MapRenderer {
            access_token,
            line_layout: LineLayout::default(),
            line_paint: LinePaint::default(),
            marker_icon: MarkerIcon::default(),
        })
    }

    /// builds the overlay for the current state. markers appear for each
    /// resolved endpoint; the route line appears only when both resolve.
    ///
    /// # Arguments
    ///
    /// * `view_state`  - current camera
    /// * `map_style`   - selected base map
    /// * `source`      - resolved source place, if any
    /// * `destination` - resolved destination place, if any
    /// * `route`       - most recent route from the path service
    pub fn render(
        &self,
        view_state: &ViewState,
        map_style: MapStyle,
        source: Option<&Coordinate>,
        destination: Option<&Coordinate>,
        route: &Route,
    ) -> MapOverlay {
        let route_layer = match (source, destination) {
            (Some(_), Some(_)) => Some(self.route_layer(route)),
            _ => None,
        };
        let markers = [(MarkerRole::Source, source), (MarkerRole::Destination, destination)]
            .into_iter()
            .filter_map(|(role, place)| place.map(|c| self.marker(role, c)))
            .collect();
        MapOverlay {
            view_state: *view_state,
            map_style,
            style_url: map_style.style_url().to_string(),
            route_layer,
            markers,
            geolocate: GeolocateControl::default(),
        }
    }

    /// writes a standalone HTML page that draws the overlay with mapbox-gl.
    pub fn render_page(&self, overlay: &MapOverlay) -> Result<String, OverlayError> {
        map_page::render_page(overlay, &self.access_token)
    }

    fn route_layer(&self, route: &Route) -> RouteLayer {
        let geometry = Geometry::new(Value::LineString(route.positions()));
        let data = Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(JsonObject::new()),
            foreign_members: None,
        };
        RouteLayer {
            id: ROUTE_LAYER_ID.to_string(),
            layer_type: String::from("line"),
            layout: self.line_layout.clone(),
            paint: self.line_paint.clone(),
            data,
        }
    }

    fn marker(&self, role: MarkerRole, coordinate: &Coordinate) -> Marker {
        Marker {
            role,
            longitude: coordinate.longitude,
            latitude: coordinate.latitude,
            icon: self.marker_icon,
        }
    }
}
