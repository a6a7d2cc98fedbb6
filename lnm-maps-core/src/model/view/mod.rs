mod map_style;
mod view_state;

pub use map_style::MapStyle;
pub use view_state::ViewState;
