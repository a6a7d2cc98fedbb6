use lnm_maps_core::model::overlay::MapOverlay;
use serde::Serialize;

/// one full projection of component state, written after every event.
#[derive(Serialize, Debug, Clone)]
pub struct MapFrame {
    #[serde(flatten)]
    pub overlay: MapOverlay,
    pub form: FormView,
    /// a route request is outstanding
    pub route_pending: bool,
    /// most recent route request failure, cleared by the next submit
    pub route_error: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct FormView {
    pub source: FieldView,
    pub destination: FieldView,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct FieldView {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub suggestions: Vec<String>,
}
