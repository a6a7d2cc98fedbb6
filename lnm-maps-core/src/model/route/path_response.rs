use serde::{Deserialize, Serialize};

/// body returned by the path service. each entry of `path` is a
/// `[longitude, latitude]` pair, ordered from start to end. any other
/// fields the service includes are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PathResponse {
    pub path: Vec<[f64; 2]>,
}
