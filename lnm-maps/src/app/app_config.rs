use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Source};
use lnm_maps_core::model::{
    overlay::AccessToken,
    view::{MapStyle, ViewState},
};
use serde::{Deserialize, Serialize};

use super::AppError;
use crate::{component::DEFAULT_SUGGESTION_LIMIT, service::PathServiceConfig};

/// prefix of environment variables overriding file values, for example
/// `LNM_MAPS_ACCESS_TOKEN` or `LNM_MAPS_PATH_SERVICE__ENDPOINT`.
pub const ENV_PREFIX: &str = "LNM_MAPS";

/// application settings, layered from an optional TOML file and the
/// environment. the access token is expected to come from the environment.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// map tile provider token handed to the renderer
    #[serde(default)]
    pub access_token: AccessToken,
    /// JSON file with the place name table. a relative path is resolved
    /// against the directory of the configuration file.
    pub place_table_file: PathBuf,
    /// number of place suggestions shown under each input
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// camera used when the map first opens
    #[serde(default)]
    pub initial_view: ViewState,
    /// base map selected when the map first opens
    #[serde(default)]
    pub map_style: MapStyle,
    pub path_service: PathServiceConfig,
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl AppConfig {
    /// reads configuration from the file (if given) with environment overrides.
    pub fn load(config_file: Option<&Path>) -> Result<AppConfig, AppError> {
        let file = config_file.map(File::from);
        let mut config = AppConfig::build(file, AppConfig::environment())?;
        if let Some(path) = config_file {
            if let Some(dir) = path.parent() {
                config.resolve_relative_paths(dir);
            }
            log::debug!("loaded configuration from '{}'", path.display());
        }
        Ok(config)
    }

    /// makes relative file paths relative to `base_dir` instead of the
    /// working directory.
    pub fn resolve_relative_paths(&mut self, base_dir: &Path) {
        if self.place_table_file.is_relative() {
            self.place_table_file = base_dir.join(&self.place_table_file);
        }
    }

    /// the environment source used by [`AppConfig::load`]
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// layers a file-like source under an environment source and
    /// deserializes the result.
    pub fn build<S>(file: Option<S>, environment: Environment) -> Result<AppConfig, AppError>
    where
        S: Source + Send + Sync + 'static,
    {
        let mut builder = Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(file);
        }
        let config = builder
            .add_source(environment)
            .build()
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        let app_config = config
            .try_deserialize::<AppConfig>()
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), AppError> {
        self.initial_view
            .validate()
            .map_err(|msg| AppError::Configuration(format!("initial_view: {msg}")))?;
        if self.path_service.endpoint.trim().is_empty() {
            return Err(AppError::Configuration(String::from(
                "path_service.endpoint must not be empty",
            )));
        }
        Ok(())
    }
}
