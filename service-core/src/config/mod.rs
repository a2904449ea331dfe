use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Environment variable that overrides the listen port, for platforms that inject one.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Loads `.env`, the optional `configuration` file and `APP__*` variables.
    /// A bare `PORT` variable wins over all of them.
    pub fn load(default_port: u16) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_sources(default_port, std::env::var(PORT_ENV).ok())
    }

    fn from_sources(default_port: u16, port_override: Option<String>) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .set_default("port", i64::from(default_port))?
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port_override)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
