use std::path::PathBuf;

use lnm_maps_core::model::{overlay::OverlayError, place::PlaceTableError};

use crate::service::PathServiceError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error(transparent)]
    PlaceTable(#[from] PlaceTableError),
    #[error(transparent)]
    Overlay(#[from] OverlayError),
    #[error(transparent)]
    PathService(#[from] PathServiceError),
    #[error("Error creating a runtime to handle async code: {0}")]
    Runtime(String),
    #[error("Error reading session input: {0}")]
    Input(String),
    #[error("Error writing output: {0}")]
    Output(String),
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
}
