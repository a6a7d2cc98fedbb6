use std::{future::Future, time::Duration};

use lnm_maps_core::model::route::{PathRequest, PathResponse};
use reqwest::{Client, Url};

use super::{PathService, PathServiceConfig, PathServiceError, PathServiceMethod};

/// longest slice of an error body kept in a status error
const MAX_ERROR_BODY: usize = 256;

/// [`PathService`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPathService {
    client: Client,
    endpoint: Url,
    method: PathServiceMethod,
}

impl TryFrom<&PathServiceConfig> for HttpPathService {
    type Error = PathServiceError;

    fn try_from(config: &PathServiceConfig) -> Result<Self, Self::Error> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|e| PathServiceError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                message: e.to_string(),
            })?;
        let mut builder = Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| PathServiceError::Build(e.to_string()))?;
        Ok(HttpPathService::new(client, endpoint, config.method))
    }
}

impl HttpPathService {
    pub fn new(client: Client, endpoint: Url, method: PathServiceMethod) -> Self {
        Self {
            client,
            endpoint,
            method,
        }
    }

    /// encodes a path request for the configured endpoint and method.
    pub fn build_request(&self, request: &PathRequest) -> Result<reqwest::Request, PathServiceError> {
        let builder = match self.method {
            PathServiceMethod::Post => self.client.post(self.endpoint.clone()).json(request),
            PathServiceMethod::Get => self.client.get(self.endpoint.clone()).query(request),
        };
        builder
            .build()
            .map_err(|e| PathServiceError::Request(format!("failure encoding request: {e}")))
    }

    async fn send(&self, request: PathRequest) -> Result<PathResponse, PathServiceError> {
        let http_request = self.build_request(&request)?;
        log::debug!("requesting path from {}", self.endpoint);
        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(|e| PathServiceError::Request(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PathServiceError::Request(e.to_string()))?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            let message = text.chars().take(MAX_ERROR_BODY).collect::<String>();
            return Err(PathServiceError::Status {
                status: status.as_u16(),
                message,
            });
        }
        serde_json::from_slice::<PathResponse>(&body)
            .map_err(|e| PathServiceError::Decode(e.to_string()))
    }
}

impl PathService for HttpPathService {
    fn get_direction(
        &self,
        request: PathRequest,
    ) -> impl Future<Output = Result<PathResponse, PathServiceError>> + Send {
        self.send(request)
    }
}
