mod coordinate;
mod place_table;
mod place_table_error;

pub use coordinate::Coordinate;
pub use place_table::PlaceTable;
pub use place_table_error::PlaceTableError;
