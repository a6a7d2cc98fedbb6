use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::{Parser, Subcommand};
use lnm_maps_core::model::{
    form::FormFieldName,
    overlay::MapRenderer,
    place::PlaceTable,
};
use serde::{Deserialize, Serialize};

use super::{AppConfig, AppError, MapSession};
use crate::{
    component::{FetchCommand, MapComponent, SubmitOutcome},
    service::PathService,
};

/// Campus map: pick a source and destination, fetch the route between them
/// from the path service and draw it over the base map.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct MapsApp {
    /// TOML configuration file. any value may be overridden with an
    /// LNM_MAPS_* environment variable, e.g. LNM_MAPS_ACCESS_TOKEN.
    #[arg(short, long, global = true)]
    pub config_file: Option<String>,

    #[command(subcommand)]
    pub op: MapsOperation,
}

impl MapsApp {
    pub fn run(&self) -> Result<(), AppError> {
        let config = AppConfig::load(self.config_file.as_deref().map(Path::new))?;
        self.op.run(&config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum MapsOperation {
    /// list the known place names
    Places {
        /// only list places matching this partial name
        #[arg(short, long)]
        query: Option<String>,
    },
    /// fetch and render the route between two places
    Route {
        /// starting place name
        #[arg(short, long)]
        source: String,

        /// destination place name
        #[arg(short, long)]
        destination: String,

        /// write the map frame JSON here instead of stdout
        #[arg(short, long)]
        output_file: Option<String>,

        /// also write a standalone HTML page showing the map
        #[arg(short, long)]
        page_file: Option<String>,
    },
    /// read JSON map events from stdin and write one frame per event to stdout
    Session,
}

impl MapsOperation {
    pub fn run(&self, config: &AppConfig) -> Result<(), AppError> {
        match self {
            MapsOperation::Places { query } => {
                let places = PlaceTable::try_from(config.place_table_file.as_path())?;
                let labels: Vec<&str> = match query {
                    Some(q) => places.suggest(q, places.len()),
                    None => places.labels().collect(),
                };
                let mut stdout = std::io::stdout().lock();
                for label in labels {
                    writeln!(stdout, "{label}").map_err(|e| AppError::Output(e.to_string()))?;
                }
                Ok(())
            }
            MapsOperation::Route {
                source,
                destination,
                output_file,
                page_file,
            } => run_route(
                config,
                &config.path_service.build()?,
                source,
                destination,
                output_file.as_deref().map(Path::new),
                page_file.as_deref().map(Path::new),
            ),
            MapsOperation::Session => {
                let component = build_component(config)?;
                let renderer = MapRenderer::new(config.access_token.clone())?;
                let service = Arc::new(config.path_service.build()?);
                let runtime = build_runtime()?;
                let session = MapSession::new(component, renderer, service);
                let input = tokio::io::BufReader::new(tokio::io::stdin());
                let mut stdout = std::io::stdout().lock();
                runtime.block_on(session.run(input, &mut stdout))?;
                Ok(())
            }
        }
    }
}

/// fills the form, submits once and writes the resulting frame (and page).
fn run_route(
    config: &AppConfig,
    service: &impl PathService,
    source: &str,
    destination: &str,
    output_file: Option<&Path>,
    page_file: Option<&Path>,
) -> Result<(), AppError> {
    let mut component = build_component(config)?;
    let renderer = MapRenderer::new(config.access_token.clone())?;
    component.set_input(FormFieldName::Source, source.to_string());
    component.set_input(FormFieldName::Destination, destination.to_string());

    match component.submit() {
        SubmitOutcome::Fetch(FetchCommand { ticket, request }) => {
            let runtime = build_runtime()?;
            let result = runtime.block_on(service.get_direction(request));
            component.complete_fetch(ticket, result);
        }
        SubmitOutcome::Invalid => {
            let msg = component
                .form()
                .errors()
                .iter()
                .map(|(_, e)| e.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AppError::InvalidUserInput(msg));
        }
        SubmitOutcome::Unresolved(fields) => {
            for field in fields {
                let label = component.form().value(field);
                log::warn!("{field} '{label}' is not a known place, no route requested");
            }
        }
        SubmitOutcome::Busy(ticket) => {
            log::debug!("route request {ticket} already outstanding");
        }
    }

    let frame = component.frame(&renderer);
    let json =
        serde_json::to_string_pretty(&frame).map_err(|e| AppError::Output(e.to_string()))?;
    match output_file {
        Some(path) => write_file(path, &json)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|e| AppError::Output(e.to_string()))?;
        }
    }
    if let Some(path) = page_file {
        let page = renderer.render_page(&frame.overlay)?;
        write_file(path, &page)?;
        log::info!("wrote map page to '{}'", path.display());
    }
    if let Some(error) = component.route_error() {
        log::error!("{error}");
    }
    Ok(())
}

/// loads the place table and sets up the component from configuration
fn build_component(config: &AppConfig) -> Result<MapComponent, AppError> {
    let places = PlaceTable::try_from(config.place_table_file.as_path())?;
    log::info!(
        "loaded {} places from '{}'",
        places.len(),
        config.place_table_file.display()
    );
    let component = MapComponent::new(Arc::new(places), config.initial_view, config.map_style)
        .with_suggestion_limit(config.suggestion_limit);
    Ok(component)
}

fn build_runtime() -> Result<tokio::runtime::Runtime, AppError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::Runtime(format!("failure creating async rust tokio runtime: {e}")))
}

fn write_file(path: &Path, contents: &str) -> Result<(), AppError> {
    std::fs::write(path, contents).map_err(|e| AppError::WriteError {
        path: PathBuf::from(path),
        message: e.to_string(),
    })
}
