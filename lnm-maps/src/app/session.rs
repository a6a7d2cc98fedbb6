use std::{io::Write, sync::Arc};

use lnm_maps_core::model::{overlay::MapRenderer, route::PathResponse};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    task::JoinHandle,
};

use super::AppError;
use crate::{
    component::{FetchCommand, FetchTicket, MapComponent, MapEvent},
    service::{PathService, PathServiceError},
};

type FetchResult = Result<PathResponse, PathServiceError>;

/// what the event loop should do after reading one input line
enum LineOutcome {
    Continue,
    Quit,
}

/// drives a [`MapComponent`] from a stream of JSON events. route requests
/// run as tasks on the current runtime and are joined by the event loop,
/// so input keeps flowing while a request is outstanding.
pub struct MapSession<S> {
    component: MapComponent,
    renderer: MapRenderer,
    service: Arc<S>,
    fetch_task: Option<(FetchTicket, JoinHandle<FetchResult>)>,
}

impl<S> MapSession<S>
where
    S: PathService + Send + Sync + 'static,
{
    pub fn new(component: MapComponent, renderer: MapRenderer, service: Arc<S>) -> Self {
        Self {
            component,
            renderer,
            service,
            fetch_task: None,
        }
    }

    /// runs until a `quit` event or the end of input. a frame is written
    /// for the initial state and after every event that changes the view.
    /// at end of input, an outstanding route request is awaited; a `quit`
    /// aborts it instead.
    ///
    /// # Returns
    ///
    /// * the component in its final state
    pub async fn run<R, W>(mut self, input: R, output: &mut W) -> Result<MapComponent, AppError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let mut input_open = true;
        self.write_frame(output)?;
        loop {
            if !input_open && self.fetch_task.is_none() {
                break;
            }
            tokio::select! {
                line = lines.next_line(), if input_open => {
                    match line.map_err(|e| AppError::Input(e.to_string()))? {
                        None => {
                            log::debug!("session input closed");
                            input_open = false;
                        }
                        Some(line) => {
                            if let LineOutcome::Quit = self.handle_line(&line, output)? {
                                break;
                            }
                        }
                    }
                }
                (ticket, result) = join_fetch(&mut self.fetch_task), if self.fetch_task.is_some() => {
                    self.fetch_task = None;
                    if self.component.complete_fetch(ticket, result) {
                        self.write_frame(output)?;
                    }
                }
            }
        }
        Ok(self.component)
    }

    fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<LineOutcome, AppError> {
        if line.trim().is_empty() {
            return Ok(LineOutcome::Continue);
        }
        let event = match serde_json::from_str::<MapEvent>(line) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("skipping unreadable event '{line}': {e}");
                return Ok(LineOutcome::Continue);
            }
        };
        if event == MapEvent::Quit {
            self.component.handle_event(event);
            if let Some((_, task)) = self.fetch_task.take() {
                task.abort();
            }
            self.write_frame(output)?;
            return Ok(LineOutcome::Quit);
        }
        if let Some(command) = self.component.handle_event(event) {
            self.fetch_task = Some(self.spawn_fetch(command));
        }
        self.write_frame(output)?;
        Ok(LineOutcome::Continue)
    }

    fn spawn_fetch(&self, command: FetchCommand) -> (FetchTicket, JoinHandle<FetchResult>) {
        let service = Arc::clone(&self.service);
        let FetchCommand { ticket, request } = command;
        let task = tokio::spawn(async move { service.get_direction(request).await });
        (ticket, task)
    }

    fn write_frame<W: Write>(&self, output: &mut W) -> Result<(), AppError> {
        let frame = self.component.frame(&self.renderer);
        serde_json::to_writer(&mut *output, &frame)
            .map_err(|e| AppError::Output(e.to_string()))?;
        writeln!(output).map_err(|e| AppError::Output(e.to_string()))?;
        output.flush().map_err(|e| AppError::Output(e.to_string()))
    }
}

/// waits for the outstanding route task. a task that panicked or was
/// aborted completes its ticket with an error so the request never stays
/// pending.
async fn join_fetch(
    fetch_task: &mut Option<(FetchTicket, JoinHandle<FetchResult>)>,
) -> (FetchTicket, FetchResult) {
    match fetch_task {
        Some((ticket, task)) => {
            let result = match task.await {
                Ok(result) => result,
                Err(e) => Err(PathServiceError::Request(format!(
                    "route task {ticket} ended without a response: {e}"
                ))),
            };
            (*ticket, result)
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use std::{
        future::Future,
        sync::{Arc, Mutex},
        time::Duration,
    };

    use lnm_maps_core::model::{
        overlay::AccessToken,
        place::{Coordinate, PlaceTable},
        route::PathRequest,
        view::{MapStyle, ViewState},
    };

    use super::*;

    /// answers every request with a fixed path after an optional delay,
    /// recording the requests it received
    struct MockPathService {
        path: Vec<[f64; 2]>,
        delay: Duration,
        requests: Mutex<Vec<PathRequest>>,
    }

    impl MockPathService {
        fn new(path: Vec<[f64; 2]>, delay: Duration) -> Self {
            Self {
                path,
                delay,
                requests: Mutex::new(vec![]),
            }
        }

        fn requests(&self) -> Vec<PathRequest> {
            self.requests.lock().map(|r| r.clone()).unwrap_or_default()
        }
    }

    impl PathService for MockPathService {
        fn get_direction(
            &self,
            request: PathRequest,
        ) -> impl Future<Output = Result<PathResponse, PathServiceError>> + Send {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request);
            }
            let path = self.path.clone();
            let delay = self.delay;
            async move {
                tokio::time::sleep(delay).await;
                Ok(PathResponse { path })
            }
        }
    }

    /// always fails, as if the service were down
    struct DownPathService;

    /// panics inside the request future
    struct BrokenPathService;

    impl PathService for BrokenPathService {
        fn get_direction(
            &self,
            request: PathRequest,
        ) -> impl Future<Output = Result<PathResponse, PathServiceError>> + Send {
            async move {
                if request.start_x.is_finite() {
                    panic!("path service crashed");
                }
                Ok(PathResponse { path: vec![] })
            }
        }
    }

    impl PathService for DownPathService {
        fn get_direction(
            &self,
            _request: PathRequest,
        ) -> impl Future<Output = Result<PathResponse, PathServiceError>> + Send {
            async { Err(PathServiceError::Request(String::from("connection refused"))) }
        }
    }

    fn component() -> MapComponent {
        let places = PlaceTable::try_new([
            (String::from("Library"), Coordinate::new(26.91, 75.80)),
            (String::from("Station"), Coordinate::new(26.92, 75.82)),
        ])
        .expect("test invariant failed: bad place table");
        MapComponent::new(Arc::new(places), ViewState::default(), MapStyle::Satellite)
    }

    fn renderer() -> MapRenderer {
        MapRenderer::new(AccessToken::new("pk.test")).expect("test invariant failed")
    }

    fn frames(output: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(output)
            .lines()
            .map(|l| serde_json::from_str(l).expect("each output line should be a JSON frame"))
            .collect()
    }

    const SCENARIO: &str = concat!(
        r#"{"event":"input","field":"source","value":"Library"}"#,
        "\n",
        r#"{"event":"input","field":"destination","value":"Station"}"#,
        "\n",
        r#"{"event":"submit"}"#,
        "\n",
    );

    #[tokio::test]
    async fn test_session_fetches_and_draws_route() {
        let path = vec![[75.80, 26.91], [75.81, 26.915], [75.82, 26.92]];
        let service = Arc::new(MockPathService::new(path, Duration::ZERO));
        let session = MapSession::new(component(), renderer(), Arc::clone(&service));
        let mut output = Vec::new();
        let component = session
            .run(SCENARIO.as_bytes(), &mut output)
            .await
            .expect("session should succeed");

        assert_eq!(
            service.requests(),
            vec![PathRequest {
                start_x: 26.91,
                start_y: 75.80,
                end_x: 26.92,
                end_y: 75.82
            }]
        );
        assert_eq!(component.route().len(), 3);

        let frames = frames(&output);
        // initial + three events + route arrival
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[3]["route_pending"], true);
        let last = &frames[4];
        assert_eq!(last["route_pending"], false);
        assert_eq!(
            last["route_layer"]["data"]["geometry"]["coordinates"],
            serde_json::json!([[75.80, 26.91], [75.81, 26.915], [75.82, 26.92]])
        );
    }

    #[tokio::test]
    async fn test_events_flow_while_request_outstanding() {
        let service = Arc::new(MockPathService::new(
            vec![[75.80, 26.91], [75.82, 26.92]],
            Duration::from_millis(50),
        ));
        let input = format!(
            "{SCENARIO}{}\n{}\n{}\n",
            r#"{"event":"submit"}"#,
            r#"{"event":"style","style":"Street"}"#,
            r#"{"event":"move","longitude":75.81,"latitude":26.915,"zoom":15.0}"#,
        );
        let session = MapSession::new(component(), renderer(), Arc::clone(&service));
        let mut output = Vec::new();
        let component = session
            .run(input.as_bytes(), &mut output)
            .await
            .expect("session should succeed");

        // the second submit arrived while busy and was not sent
        assert_eq!(service.requests().len(), 1);
        assert_eq!(component.map_style(), MapStyle::Street);
        assert_eq!(component.view_state(), &ViewState::new(75.81, 26.915, 15.0));
        assert_eq!(component.route().len(), 2);
    }

    #[tokio::test]
    async fn test_quit_cancels_outstanding_request() {
        let service = Arc::new(MockPathService::new(
            vec![[75.80, 26.91], [75.82, 26.92]],
            Duration::from_secs(60),
        ));
        let input = format!("{SCENARIO}{}\n", r#"{"event":"quit"}"#);
        let session = MapSession::new(component(), renderer(), Arc::clone(&service));
        let mut output = Vec::new();
        let component = session
            .run(input.as_bytes(), &mut output)
            .await
            .expect("session should succeed");
        assert!(component.pending().is_none());
        assert!(component.route().is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_keeps_view_alive() {
        let session = MapSession::new(component(), renderer(), Arc::new(DownPathService));
        let input = format!("{SCENARIO}not json\n");
        let mut output = Vec::new();
        let component = session
            .run(input.as_bytes(), &mut output)
            .await
            .expect("session should succeed");
        assert!(component.route().is_empty());
        assert_eq!(
            component.route_error(),
            Some("path service request failed: connection refused")
        );
        let frames = frames(&output);
        let last = frames.last().expect("frames expected");
        assert_eq!(
            last["route_error"],
            "path service request failed: connection refused"
        );
    }

    #[tokio::test]
    async fn test_crashed_request_does_not_hang_session() {
        let session = MapSession::new(component(), renderer(), Arc::new(BrokenPathService));
        let mut output = Vec::new();
        let component = tokio::time::timeout(
            Duration::from_secs(3),
            session.run(SCENARIO.as_bytes(), &mut output),
        )
        .await
        .expect("session should finish after the route task ends")
        .expect("session should succeed");

        assert!(component.pending().is_none());
        assert!(component.route().is_empty());
        let error = component.route_error().expect("route error expected");
        assert!(error.starts_with("path service request failed: route task #"));
        let frames = frames(&output);
        let last = frames.last().expect("frames expected");
        assert_eq!(last["route_pending"], false);
        assert_eq!(last["form"]["submit_enabled"], true);
    }
}
