use std::process::ExitCode;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use velib_server::cli::{self, Command, USAGE};
use velib_server::config::AppConfig;
use velib_server::stations::{SnapshotSource, SnapshotStore, StationClient, StationSource};
use velib_server::web::{AppState, create_router};

const DEFAULT_LOG_FILTER: &str = "velib_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let command = match Command::from_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Serve => serve(config).await,
        Command::Snapshot => {
            let client = StationClient::new(config.client_config())?;
            let store = SnapshotStore::new(&config.snapshot_dir);
            cli::run_snapshot(&client, config.limit, &store, &mut std::io::stdout()).await?;
            Ok(())
        }
        Command::Check => {
            let client = StationClient::new(config.client_config())?;
            cli::run_check(&client, &mut std::io::stdout()).await?;
            Ok(())
        }
    }
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let source: Arc<dyn StationSource> = match &config.offline_snapshot {
        Some(path) => {
            let source = SnapshotSource::from_file(path)?;
            info!(path = %path.display(), rows = source.len(), "serving offline snapshot");
            Arc::new(source)
        }
        None => Arc::new(StationClient::new(config.client_config())?),
    };

    let state = AppState::from_shared(source, config.limit);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Vélib' station server listening");
    println!("Open http://{} in your browser.", config.bind_addr);
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                       - Health check");
    println!("  GET  /api/stations                 - All stations with bikes");
    println!("  GET  /api/stations/search/{{query}}  - Stations by name");

    axum::serve(listener, app).await?;
    Ok(())
}
