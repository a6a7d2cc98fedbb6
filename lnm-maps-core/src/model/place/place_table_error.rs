use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum PlaceTableError {
    #[error("failure reading place table from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse place table due to: {0}")]
    Parse(String),
    #[error("place '{label}' has an invalid coordinate: {message}")]
    InvalidCoordinate { label: String, message: String },
    #[error("place table contains an empty label")]
    EmptyLabel,
}
