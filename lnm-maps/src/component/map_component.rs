use std::sync::Arc;

use lnm_maps_core::model::{
    form::{FormFieldName, FormSchema, RouteForm},
    overlay::MapRenderer,
    place::{Coordinate, PlaceTable},
    route::{PathRequest, PathResponse, Route},
    view::{MapStyle, ViewState},
};

use super::{FetchCommand, FetchTicket, FieldView, FormView, MapEvent, MapFrame, SubmitOutcome};
use crate::service::PathServiceError;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;
const SUBMIT_LABEL: &str = "Get Direction";

/// state of the map view: the route form, camera, base style and the
/// current route. the component never performs I/O itself; a submit hands
/// back a [`FetchCommand`] and the host reports the outcome through
/// [`MapComponent::complete_fetch`].
#[derive(Debug)]
pub struct MapComponent {
    places: Arc<PlaceTable>,
    form: RouteForm,
    view_state: ViewState,
    map_style: MapStyle,
    route: Route,
    pending: Option<FetchTicket>,
    next_ticket: u64,
    route_error: Option<String>,
    suggestion_limit: usize,
}

impl MapComponent {
    pub fn new(places: Arc<PlaceTable>, view_state: ViewState, map_style: MapStyle) -> Self {
        Self {
            places,
            form: RouteForm::new(FormSchema::default()),
            view_state,
            map_style,
            route: Route::default(),
            pending: None,
            next_ticket: 0,
            route_error: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn with_suggestion_limit(mut self, suggestion_limit: usize) -> Self {
        self.suggestion_limit = suggestion_limit;
        self
    }

    /// applies a user event. returns a route request when the event was a
    /// submit that passed validation and resolution.
    pub fn handle_event(&mut self, event: MapEvent) -> Option<FetchCommand> {
        match event {
            MapEvent::Input { field, value } => {
                self.set_input(field, value);
                None
            }
            MapEvent::Submit => match self.submit() {
                SubmitOutcome::Fetch(command) => Some(command),
                _ => None,
            },
            MapEvent::Style { style } => {
                self.set_map_style(style);
                None
            }
            MapEvent::Move(view_state) => {
                self.move_camera(view_state);
                None
            }
            MapEvent::Quit => {
                self.cancel_pending();
                None
            }
        }
    }

    pub fn set_input(&mut self, field: FormFieldName, value: String) {
        log::debug!("{field} input changed to '{value}'");
        self.form.set_value(field, value);
    }

    /// validates the form, resolves both labels and, if nothing is
    /// outstanding, issues a new route request.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.form.validate() {
            log::debug!("submit rejected by form validation");
            return SubmitOutcome::Invalid;
        }
        if let Some(ticket) = self.pending {
            log::debug!("submit ignored, route request {ticket} still outstanding");
            return SubmitOutcome::Busy(ticket);
        }
        let (source, destination) = match (self.resolved_source(), self.resolved_destination()) {
            (Some(source), Some(destination)) => (*source, *destination),
            (source, destination) => {
                let unresolved = [
                    (FormFieldName::Source, source.is_none()),
                    (FormFieldName::Destination, destination.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, missing)| missing.then_some(field))
                .collect::<Vec<_>>();
                log::debug!("submit skipped, unresolved places for {unresolved:?}");
                return SubmitOutcome::Unresolved(unresolved);
            }
        };
        let ticket = FetchTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.route_error = None;
        let request = PathRequest::new(&source, &destination);
        log::info!(
            "requesting route {ticket} from '{}' to '{}'",
            self.form.value(FormFieldName::Source),
            self.form.value(FormFieldName::Destination)
        );
        SubmitOutcome::Fetch(FetchCommand { ticket, request })
    }

    /// reports the outcome of a route request. a success replaces the route
    /// wholesale; a failure keeps the previous route and records the error.
    ///
    /// # Returns
    ///
    /// * false if the ticket is not the outstanding request and was ignored
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<PathResponse, PathServiceError>,
    ) -> bool {
        if self.pending != Some(ticket) {
            log::debug!("dropping stale route response {ticket}");
            return false;
        }
        self.pending = None;
        match result {
            Ok(response) => {
                self.route = Route::from(response);
                log::info!("route {ticket} loaded with {} points", self.route.len());
            }
            Err(e) => {
                log::warn!("route {ticket} failed, keeping previous route: {e}");
                self.route_error = Some(e.to_string());
            }
        }
        true
    }

    /// forgets the outstanding request so its response is never applied
    pub fn cancel_pending(&mut self) {
        if let Some(ticket) = self.pending.take() {
            log::debug!("cancelled route request {ticket}");
        }
    }

    pub fn set_map_style(&mut self, map_style: MapStyle) {
        log::debug!("map style changed to {map_style}");
        self.map_style = map_style;
    }

    /// updates the camera after a pan or zoom. an invalid camera is ignored.
    pub fn move_camera(&mut self, view_state: ViewState) {
        match view_state.validate() {
            Ok(()) => self.view_state = view_state,
            Err(msg) => log::warn!("ignoring map move: {msg}"),
        }
    }

    pub fn resolved_source(&self) -> Option<&Coordinate> {
        self.places.resolve(self.form.value(FormFieldName::Source))
    }

    pub fn resolved_destination(&self) -> Option<&Coordinate> {
        self.places.resolve(self.form.value(FormFieldName::Destination))
    }

    pub fn pending(&self) -> Option<FetchTicket> {
        self.pending
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn map_style(&self) -> MapStyle {
        self.map_style
    }

    pub fn form(&self) -> &RouteForm {
        &self.form
    }

    pub fn route_error(&self) -> Option<&str> {
        self.route_error.as_deref()
    }

    /// the submit button is enabled only for a valid form with no
    /// outstanding request
    pub fn submit_enabled(&self) -> bool {
        self.form.is_valid() && self.pending.is_none()
    }

    /// projects the current state into a frame for display.
    pub fn frame(&self, renderer: &MapRenderer) -> MapFrame {
        let overlay = renderer.render(
            &self.view_state,
            self.map_style,
            self.resolved_source(),
            self.resolved_destination(),
            &self.route,
        );
        MapFrame {
            overlay,
            form: FormView {
                source: self.field_view(FormFieldName::Source),
                destination: self.field_view(FormFieldName::Destination),
                submit_label: SUBMIT_LABEL,
                submit_enabled: self.submit_enabled(),
            },
            route_pending: self.pending.is_some(),
            route_error: self.route_error.clone(),
        }
    }

    fn field_view(&self, name: FormFieldName) -> FieldView {
        let field = self.form.field(name);
        FieldView {
            label: name.label(),
            placeholder: name.placeholder(),
            value: field.value.clone(),
            error: field.error.as_ref().map(|e| e.to_string()),
            suggestions: self
                .places
                .suggest(&field.value, self.suggestion_limit)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lnm_maps_core::model::overlay::{AccessToken, MarkerRole};

    fn places() -> Arc<PlaceTable> {
        let table = PlaceTable::try_new([
            (String::from("Library"), Coordinate::new(26.91, 75.80)),
            (String::from("Station"), Coordinate::new(26.92, 75.82)),
        ])
        .expect("test invariant failed: bad place table");
        Arc::new(table)
    }

    fn component() -> MapComponent {
        MapComponent::new(places(), ViewState::default(), MapStyle::Satellite)
    }

    fn renderer() -> MapRenderer {
        MapRenderer::new(AccessToken::new("pk.test")).expect("test invariant failed")
    }

    fn fill(component: &mut MapComponent, source: &str, destination: &str) {
        component.handle_event(MapEvent::Input {
            field: FormFieldName::Source,
            value: source.to_string(),
        });
        component.handle_event(MapEvent::Input {
            field: FormFieldName::Destination,
            value: destination.to_string(),
        });
    }

    fn scenario_response() -> PathResponse {
        PathResponse {
            path: vec![[75.80, 26.91], [75.81, 26.915], [75.82, 26.92]],
        }
    }

    #[test]
    fn test_library_to_station() {
        let mut component = component();
        fill(&mut component, "Library", "Station");
        let command = component
            .handle_event(MapEvent::Submit)
            .expect("submit should issue a request");
        assert_eq!(
            command.request,
            PathRequest {
                start_x: 26.91,
                start_y: 75.80,
                end_x: 26.92,
                end_y: 75.82
            }
        );
        assert!(component.complete_fetch(command.ticket, Ok(scenario_response())));

        let frame = component.frame(&renderer());
        let layer = frame.overlay.route_layer.as_ref().expect("route expected");
        assert_eq!(
            layer.positions(),
            Some(&vec![
                vec![75.80, 26.91],
                vec![75.81, 26.915],
                vec![75.82, 26.92]
            ])
        );
        assert_eq!(frame.overlay.markers.len(), 2);
        assert!(!frame.route_pending);
        assert!(frame.form.submit_enabled);
    }

    #[test]
    fn test_unknown_source_is_not_fetched() {
        let mut component = component();
        fill(&mut component, "Unknown Place", "Station");
        assert_eq!(
            component.submit(),
            SubmitOutcome::Unresolved(vec![FormFieldName::Source])
        );
        assert!(component.pending().is_none());

        let frame = component.frame(&renderer());
        assert!(frame.overlay.marker(MarkerRole::Source).is_none());
        assert!(frame.overlay.marker(MarkerRole::Destination).is_some());
        assert!(frame.overlay.route_layer.is_none());
    }

    #[test]
    fn test_empty_inputs_fail_validation() {
        let mut component = component();
        assert_eq!(component.submit(), SubmitOutcome::Invalid);
        let frame = component.frame(&renderer());
        assert_eq!(
            frame.form.source.error.as_deref(),
            Some("\"Source\" is not allowed to be empty")
        );
        assert_eq!(
            frame.form.destination.error.as_deref(),
            Some("\"Destination\" is not allowed to be empty")
        );
        assert!(!frame.form.submit_enabled);
    }

    #[test]
    fn test_overlapping_submit_is_busy() {
        let mut component = component();
        fill(&mut component, "Library", "Station");
        let first = match component.submit() {
            SubmitOutcome::Fetch(command) => command,
            other => panic!("expected fetch, found {other:?}"),
        };
        assert_eq!(component.submit(), SubmitOutcome::Busy(first.ticket));
        assert!(!component.submit_enabled());
        assert!(component.complete_fetch(first.ticket, Ok(scenario_response())));
        assert!(matches!(component.submit(), SubmitOutcome::Fetch(_)));
    }

    #[test]
    fn test_failed_fetch_keeps_previous_route() {
        let mut component = component();
        fill(&mut component, "Library", "Station");
        let first = component.handle_event(MapEvent::Submit).expect("fetch expected");
        component.complete_fetch(first.ticket, Ok(scenario_response()));

        let second = component.handle_event(MapEvent::Submit).expect("fetch expected");
        let error = PathServiceError::Status {
            status: 502,
            message: String::from("bad gateway"),
        };
        assert!(component.complete_fetch(second.ticket, Err(error)));
        assert_eq!(component.route(), &Route::from(scenario_response()));
        let frame = component.frame(&renderer());
        assert_eq!(
            frame.route_error.as_deref(),
            Some("path service responded with status 502: bad gateway")
        );

        // the next submit clears the transient error
        component.handle_event(MapEvent::Submit);
        assert!(component.route_error().is_none());
    }

    #[test]
    fn test_successful_fetch_replaces_route() {
        let mut component = component();
        fill(&mut component, "Library", "Station");
        let first = component.handle_event(MapEvent::Submit).expect("fetch expected");
        component.complete_fetch(first.ticket, Ok(scenario_response()));
        let second = component.handle_event(MapEvent::Submit).expect("fetch expected");
        let shorter = PathResponse {
            path: vec![[75.80, 26.91], [75.82, 26.92]],
        };
        component.complete_fetch(second.ticket, Ok(shorter.clone()));
        assert_eq!(component.route(), &Route::from(shorter));
    }

    #[test]
    fn test_cancelled_response_is_dropped() {
        let mut component = component();
        fill(&mut component, "Library", "Station");
        let command = component.handle_event(MapEvent::Submit).expect("fetch expected");
        component.handle_event(MapEvent::Quit);
        assert!(!component.complete_fetch(command.ticket, Ok(scenario_response())));
        assert!(component.route().is_empty());
    }

    #[test]
    fn test_style_toggle_changes_only_style() {
        let mut component = component();
        fill(&mut component, "Library", "Station");
        let command = component.handle_event(MapEvent::Submit).expect("fetch expected");
        component.complete_fetch(command.ticket, Ok(scenario_response()));
        let before = component.frame(&renderer());

        let effect = component.handle_event(MapEvent::Style {
            style: MapStyle::Street,
        });
        assert!(effect.is_none());
        let after = component.frame(&renderer());
        assert_eq!(after.overlay.map_style, MapStyle::Street);
        assert_eq!(after.overlay.route_layer, before.overlay.route_layer);
        assert_eq!(after.overlay.markers, before.overlay.markers);
        assert_eq!(after.overlay.view_state, before.overlay.view_state);
        assert_eq!(after.form.source.value, before.form.source.value);
    }

    #[test]
    fn test_move_changes_only_camera() {
        let mut component = component();
        fill(&mut component, "Library", "Station");
        let before = component.frame(&renderer());
        let camera = ViewState::new(75.81, 26.915, 14.0);
        assert!(component.handle_event(MapEvent::Move(camera)).is_none());
        assert!(component.pending().is_none());
        let after = component.frame(&renderer());
        assert_eq!(after.overlay.view_state, camera);
        assert_eq!(after.overlay.markers, before.overlay.markers);
        assert_eq!(after.overlay.map_style, before.overlay.map_style);

        // an invalid camera is ignored
        component.move_camera(ViewState::new(75.81, 126.0, 14.0));
        assert_eq!(component.view_state(), &camera);
    }

    #[test]
    fn test_markers_follow_typing() {
        let mut component = component();
        component.set_input(FormFieldName::Source, String::from("Lib"));
        assert!(component.resolved_source().is_none());
        let frame = component.frame(&renderer());
        assert!(frame.overlay.markers.is_empty());
        assert_eq!(frame.form.source.suggestions, vec![String::from("Library")]);

        component.set_input(FormFieldName::Source, String::from("Library"));
        let frame = component.frame(&renderer());
        assert!(frame.overlay.marker(MarkerRole::Source).is_some());
    }

    #[test]
    fn test_frame_never_contains_token() {
        let mut component = component();
        fill(&mut component, "Library", "Station");
        let frame = component.frame(&renderer());
        let json = serde_json::to_string(&frame).expect("test invariant failed");
        assert!(!json.contains("pk.test"));
        assert!(json.contains("\"submit_label\":\"Get Direction\""));
    }
}
