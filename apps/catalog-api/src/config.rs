use core_config::{AppInfo, ConfigError, FromEnv, app_info, server::ServerConfig};
use tracing::warn;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// MongoDB is optional so the API can run in degraded mode without it
    pub mongodb: Option<MongoConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = match MongoConfig::from_env() {
            Ok(config) => Some(config),
            Err(ConfigError::MissingEnvVar(key)) => {
                warn!("{key} not set, starting without MongoDB");
                None
            }
            Err(e) => return Err(e.into()),
        };
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }
}
