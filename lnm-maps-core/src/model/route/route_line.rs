use geo::{Coord, LineString};

use super::PathResponse;

/// the path currently drawn on the map, x = longitude and y = latitude.
/// a route is only ever replaced wholesale by a new service response.
#[derive(Debug, Clone, PartialEq)]
pub struct Route(LineString<f64>);

impl Default for Route {
    fn default() -> Self {
        Route(LineString::new(vec![]))
    }
}

impl Route {
    pub fn is_empty(&self) -> bool {
        self.0 .0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0 .0.len()
    }

    /// route vertices as GeoJSON positions, in order and unmodified
    pub fn positions(&self) -> Vec<Vec<f64>> {
        self.0.coords().map(|c| vec![c.x, c.y]).collect()
    }
}

impl From<PathResponse> for Route {
    fn from(value: PathResponse) -> Self {
        let coords = value
            .path
            .into_iter()
            .map(|[longitude, latitude]| Coord {
                x: longitude,
                y: latitude,
            })
            .collect::<Vec<_>>();
        Route(LineString::new(coords))
    }
}
