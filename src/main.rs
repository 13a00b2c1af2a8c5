//! BloodShare server: emergency blood donor matching.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use bloodshare_core::config::AppConfig;
use bloodshare_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `BLOODSHARE_ENV` overlay, and
/// `BLOODSHARE__*` environment variables. `BLOODSHARE_CONFIG` names an
/// explicit file instead.
fn load_configuration() -> Result<AppConfig, AppError> {
    if let Ok(path) = std::env::var("BLOODSHARE_CONFIG") {
        return AppConfig::load_file(&path);
    }

    let env = std::env::var("BLOODSHARE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting BloodShare v{}", env!("CARGO_PKG_VERSION"));

    let db_pool = bloodshare_database::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    bloodshare_database::migration::run_migrations(&db_pool).await?;

    bloodshare_api::run_server(config, db_pool).await?;

    tracing::info!("BloodShare server shut down gracefully");
    Ok(())
}
