mod app;
mod chart;
mod config;
mod dashboard;
mod data;
mod feed;
mod logging;
mod scheduler;
mod stats;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::config::{Args, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_args(Args::parse())?;
    logging::init(config.log_file.as_deref())?;

    // Initialize terminal
    let terminal = ratatui::init();

    // Run app
    let app = app::App::new(config);
    let result = app.run(terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}
