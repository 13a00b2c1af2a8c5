//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod emergency;
pub mod logging;
pub mod messaging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::emergency::{CandidateFilterPolicy, EmergencyConfig};
pub use self::logging::LoggingConfig;
pub use self::messaging::{EmailConfig, MessagingConfig, WhatsAppConfig};

use crate::error::AppError;

/// Prefix for environment-variable overrides (`BLOODSHARE__SERVER__PORT=9000`).
const ENV_PREFIX: &str = "BLOODSHARE";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay) and environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Outbound messaging (WhatsApp, email) settings.
    #[serde(default)]
    pub messaging: MessagingConfig,
    /// Emergency broadcast settings.
    #[serde(default)]
    pub emergency: EmergencyConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, the `config/{env}` overlay, and
    /// environment variables prefixed with `BLOODSHARE__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(env_source())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Load configuration from an explicit file path plus environment variables.
    pub fn load_file(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(true))
            .add_source(env_source())
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to read config '{path}': {e}"))
            })?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize_from_empty_document() {
        let config: AppConfig = config::Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("empty config should deserialize");

        assert_eq!(config.server.port, 3001);
        assert_eq!(config.messaging.whatsapp.default_country_code, "91");
        assert_eq!(
            config.emergency.filter,
            CandidateFilterPolicy::ApprovedOnly
        );
        assert!(!config.messaging.whatsapp.is_configured());
    }
}
