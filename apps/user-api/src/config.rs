use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::sql::SqlConfig;

pub use core_config::Environment;

/// Service configuration, composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when `DATABASE_URL` is unset; users are then kept in memory
    pub database: Option<SqlConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqlConfig::from_env_optional()?;
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 unless set

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}
