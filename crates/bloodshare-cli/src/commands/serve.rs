//! Start the BloodShare server.

use clap::Args;

use bloodshare_core::error::AppError;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Run database migrations on startup
    #[arg(long)]
    pub auto_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }

    println!("Starting BloodShare server...");
    output::print_kv("Host", &config.server.host);
    output::print_kv("Port", &config.server.port.to_string());

    let pool = super::create_db_pool(&config).await?;

    if args.auto_migrate {
        bloodshare_database::migration::run_migrations(&pool).await?;
        output::print_success("Migrations applied.");
    }

    bloodshare_api::run_server(config, pool).await
}
