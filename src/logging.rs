use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Send tracing output to `path`. The terminal belongs to the UI, so without
/// a path nothing is installed and events are discarded.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "modwatch=info".into()))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();

    tracing::info!("modwatch v{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
