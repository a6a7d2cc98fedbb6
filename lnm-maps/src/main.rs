use clap::Parser;
use lnm_maps::app::{AppError, MapsApp};

fn main() -> Result<(), AppError> {
    env_logger::init();
    let args = MapsApp::parse();
    args.run()
}
