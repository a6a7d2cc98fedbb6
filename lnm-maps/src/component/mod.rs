mod fetch;
mod map_component;
mod map_event;
mod map_frame;

pub use fetch::{FetchCommand, FetchTicket, SubmitOutcome};
pub use map_component::{MapComponent, DEFAULT_SUGGESTION_LIMIT};
pub use map_event::MapEvent;
pub use map_frame::{FieldView, FormView, MapFrame};
