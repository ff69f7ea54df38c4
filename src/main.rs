//! Aguinaldo engine HTTP server.
//!
//! Reads `AGUINALDO_CONFIG_DIR` and `AGUINALDO_BIND_ADDR` from the
//! environment and serves `/calculate` and `/validate`.

use std::env;

use aguinaldo_engine::api::{create_router, AppState};
use aguinaldo_engine::config::ConfigLoader;
use aguinaldo_engine::preferences::PreferenceStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/aguinaldo";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    init_logging();

    let config_dir = env::var("AGUINALDO_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("AGUINALDO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let preferences = PreferenceStore::load(&config.display().preferences_path);
    info!(
        engine = %config.engine().name,
        version = %config.engine().version,
        legal_ref = %config.engine().legal_ref,
        theme = ?preferences.theme(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Error: failed to bind {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };

    info!(addr = %bind_addr, "Listening");
    if let Err(e) = axum::serve(listener, router).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aguinaldo_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
