#[derive(thiserror::Error, Debug)]
pub enum OverlayError {
    #[error("a map access token is required to render the map")]
    MissingAccessToken,
    #[error("failure serializing map overlay: {0}")]
    Serialization(String),
}
