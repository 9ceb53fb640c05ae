//! Wiring & DI. Entry point: load config, build the poll session, inject into the UI.
//! No business logic here.

use daypoll::adapters::export::{CsvReport, JsonReport};
use daypoll::adapters::ui::tui::TuiInputPort;
use daypoll::ports::{InputPort, ReportPort};
use daypoll::shared::config::AppConfig;
use daypoll::usecases::{ExportService, PollService};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded, using defaults");
        AppConfig::default()
    });

    let title = cfg.title_or_default();
    daypoll::adapters::ui::init_ui(&title);

    // --- Poll session (one store per running UI, no globals) ---
    let start = cfg.start_date_or_default()?;
    let end = cfg.end_date_or_default()?;
    let poll = PollService::new(start, end, cfg.participants_or_default())?;

    // --- Report sinks ---
    let export_dir = cfg.export_dir_or_default();
    let export_dir_abs = export_dir.canonicalize().unwrap_or_else(|_| export_dir.clone());
    info!(path = %export_dir_abs.display(), "export directory");
    let ports: Vec<Arc<dyn ReportPort>> = vec![
        Arc::new(CsvReport::new(&export_dir)) as Arc<dyn ReportPort>,
        Arc::new(JsonReport::new(&export_dir)) as Arc<dyn ReportPort>,
    ];
    let export_service = Arc::new(ExportService::new(ports, title));
    info!(formats = ?export_service.formats(), "exports enabled");

    // --- Run (main menu -> grid / single participant / tally / export) ---
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(poll, export_service));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
