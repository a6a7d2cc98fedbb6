mod access_token;
mod map_overlay;
mod map_page;
mod map_renderer;
mod overlay_error;

pub use access_token::AccessToken;
pub use map_overlay::{
    GeolocateControl, LineLayout, LinePaint, MapOverlay, Marker, MarkerIcon, MarkerRole,
    RouteLayer,
};
pub use map_renderer::MapRenderer;
pub use overlay_error::OverlayError;
