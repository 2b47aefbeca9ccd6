// Main entry point - Dependency injection and import run
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::import_service::ImportService;
use crate::infrastructure::config::load_importer_config;
use crate::infrastructure::grafana_repository::GrafanaRepository;
use crate::presentation::console::write_outcome;

const DASHBOARDS_DIR: &str = "./dashboards";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr, stdout carries the outcome lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = load_importer_config()?;
    tracing::debug!("Loaded {:?}", config);

    // Create repository (infrastructure layer)
    let repository = Arc::new(GrafanaRepository::from_config(&config));

    // Create service (application layer)
    let service = ImportService::new(repository, config.folder_id);

    // Report each file as it finishes (presentation layer)
    let stdout = std::io::stdout();
    let outcomes = service
        .import_directory(Path::new(DASHBOARDS_DIR), |outcome| {
            let mut out = stdout.lock();
            write_outcome(&mut out, outcome)?;
            out.flush()?;
            Ok(())
        })
        .await?;

    let imported = outcomes.iter().filter(|o| o.is_imported()).count();
    tracing::info!(
        "Processed {} dashboards from {}: {} imported, {} failed",
        outcomes.len(),
        DASHBOARDS_DIR,
        imported,
        outcomes.len() - imported
    );

    Ok(())
}
