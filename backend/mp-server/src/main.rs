use mp_config::Config;
use mp_server::{AppState, DatabaseHandle, build_router, logger};

use std::error::Error;
use std::path::PathBuf;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal in deployed environments
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = match &config.logging.file {
        Some(filename) => {
            let log_dir = Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting mp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Never fatal: the API runs degraded without a store
    let database = DatabaseHandle::from_config(&config.database);
    let app = build_router(AppState::new(database));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
