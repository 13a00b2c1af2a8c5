//! CLI command definitions and dispatch.

pub mod donor;
pub mod message;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use bloodshare_core::config::AppConfig;
use bloodshare_core::error::AppError;

use crate::output::OutputFormat;

/// BloodShare: emergency blood donor matching
#[derive(Debug, Parser)]
#[command(name = "bloodshare", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the BloodShare server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Donor administration
    Donor(donor::DonorArgs),
    /// Messaging checks
    Message(message::MessageArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Donor(args) => donor::execute(args, &self.config, self.format).await,
            Commands::Message(args) => message::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_file(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    let pool = bloodshare_database::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
