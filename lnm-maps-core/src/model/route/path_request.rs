use serde::{Deserialize, Serialize};

use crate::model::place::Coordinate;

/// payload sent to the path service. the service names its fields x/y but
/// expects latitude in `*X` and longitude in `*Y`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathRequest {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl PathRequest {
    pub fn new(source: &Coordinate, destination: &Coordinate) -> PathRequest {
        PathRequest {
            start_x: source.latitude,
            start_y: source.longitude,
            end_x: destination.latitude,
            end_y: destination.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_mapping_and_wire_names() {
        let library = Coordinate::new(26.91, 75.80);
        let station = Coordinate::new(26.92, 75.82);
        let request = PathRequest::new(&library, &station);
        let json = serde_json::to_value(request).expect("test invariant failed");
        assert_eq!(
            json,
            serde_json::json!({
                "startX": 26.91,
                "startY": 75.80,
                "endX": 26.92,
                "endY": 75.82
            })
        );
    }
}
