mod http_path_service;
mod path_service;
mod path_service_config;
mod path_service_error;

pub use http_path_service::HttpPathService;
pub use path_service::PathService;
pub use path_service_config::{PathServiceConfig, PathServiceMethod, DEFAULT_TIMEOUT_MS};
pub use path_service_error::PathServiceError;
