//! HTTP server for the leave engine.
//!
//! Environment:
//! - `LEAVE_ENGINE_CONFIG`: roster directory (default `./config/demo`)
//! - `LEAVE_ENGINE_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::error::Error;

use leave_engine::api::{AppState, create_router};
use leave_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/demo";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("LEAVE_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("LEAVE_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        company = %config.company().name,
        employees = config.config().employees().len(),
        config_dir = %config_dir,
        "Roster loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(&addr).await?;
    info!("Leave engine listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
