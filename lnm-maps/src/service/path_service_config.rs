use serde::{Deserialize, Serialize};

use super::{HttpPathService, PathServiceError};

/// how the path request is encoded on the wire
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathServiceMethod {
    /// JSON body
    #[default]
    Post,
    /// query string parameters
    Get,
}

/// Serializable configuration for the path service client.
/// Builds to a [`HttpPathService`]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PathServiceConfig {
    pub endpoint: String,
    #[serde(default)]
    pub method: PathServiceMethod,
    /// request timeout in milliseconds, [`DEFAULT_TIMEOUT_MS`] when omitted
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: Option<u64>,
}

/// requests give up after this long unless configured otherwise
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

fn default_timeout_ms() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_MS)
}

impl PathServiceConfig {
    pub fn build(&self) -> Result<HttpPathService, PathServiceError> {
        HttpPathService::try_from(self)
    }
}
