use lnm_maps_core::model::{
    form::FormFieldName,
    view::{MapStyle, ViewState},
};
use serde::{Deserialize, Serialize};

/// user interaction delivered to the [`super::MapComponent`]. in a session
/// each event is one line of JSON, e.g.
/// `{"event": "input", "field": "source", "value": "Library"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum MapEvent {
    /// text typed into one of the form inputs
    Input { field: FormFieldName, value: String },
    /// the "Get Direction" button
    Submit,
    /// the map view selector
    Style { style: MapStyle },
    /// direct pan/zoom of the map
    Move(ViewState),
    /// tear down the view
    Quit,
}
