mod app_config;
mod app_error;
mod maps_app;
mod session;

pub use app_config::AppConfig;
pub use app_error::AppError;
pub use maps_app::{MapsApp, MapsOperation};
pub use session::MapSession;
