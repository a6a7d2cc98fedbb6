#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathServiceError {
    #[error("failure building path service client: {0}")]
    Build(String),
    #[error("path service endpoint '{endpoint}' is not a valid url: {message}")]
    InvalidEndpoint { endpoint: String, message: String },
    #[error("path service request failed: {0}")]
    Request(String),
    #[error("path service responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failure decoding path service response: {0}")]
    Decode(String),
}
