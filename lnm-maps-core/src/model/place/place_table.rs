use std::path::Path;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{Coordinate, PlaceTableError};

/// static lookup from place label to coordinate. built once at startup
/// and shared read-only for the lifetime of the app. entries keep the
/// order in which they appear in the source file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct PlaceTable {
    places: IndexMap<String, Coordinate>,
}

impl PlaceTable {
    /// builds a table from label/coordinate pairs, validating every entry.
    pub fn try_new(
        places: impl IntoIterator<Item = (String, Coordinate)>,
    ) -> Result<PlaceTable, PlaceTableError> {
        let table = PlaceTable {
            places: places.into_iter().collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// reads a table from a JSON object of the form
    /// `{ "<label>": { "latitude": .., "longitude": .. } }`.
    pub fn from_json_str(json: &str) -> Result<PlaceTable, PlaceTableError> {
        let table: PlaceTable =
            serde_json::from_str(json).map_err(|e| PlaceTableError::Parse(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    /// looks up the coordinate for a label exactly as typed. a missing label
    /// is a normal state (nothing to render yet), not an error.
    pub fn resolve(&self, label: &str) -> Option<&Coordinate> {
        self.places.get(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.places.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// labels matching some partial user input, ignoring case. labels that
    /// start with the input come first, followed by labels that contain it
    /// elsewhere. within each group, table order is kept.
    ///
    /// # Arguments
    ///
    /// * `query` - partial label typed by the user
    /// * `limit` - maximum number of suggestions
    ///
    /// # Returns
    ///
    /// * matching labels, empty when the query is blank
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return vec![];
        }
        let (prefixed, contained): (Vec<&str>, Vec<&str>) = self
            .labels()
            .map(|label| (label, label.to_lowercase()))
            .filter(|(_, lower)| lower.contains(&needle))
            .partition_map(|(label, lower)| {
                if lower.starts_with(&needle) {
                    itertools::Either::Left(label)
                } else {
                    itertools::Either::Right(label)
                }
            });
        prefixed.into_iter().chain(contained).take(limit).collect_vec()
    }

    fn validate(&self) -> Result<(), PlaceTableError> {
        for (label, coordinate) in self.places.iter() {
            if label.is_empty() {
                return Err(PlaceTableError::EmptyLabel);
            }
            coordinate
                .validate()
                .map_err(|message| PlaceTableError::InvalidCoordinate {
                    label: label.clone(),
                    message,
                })?;
        }
        Ok(())
    }
}

impl TryFrom<&Path> for PlaceTable {
    type Error = PlaceTableError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let json = std::fs::read_to_string(path).map_err(|e| PlaceTableError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let table = PlaceTable::from_json_str(&json).map_err(|e| match e {
            PlaceTableError::Parse(msg) => {
                PlaceTableError::Parse(format!("file '{}': {msg}", path.display()))
            }
            other => other,
        })?;
        log::debug!(
            "loaded {} places from '{}'",
            table.len(),
            path.display()
        );
        Ok(table)
    }
}
