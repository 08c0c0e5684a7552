//! Server configuration
//!
//! Layers, lowest priority first: built-in defaults, the YAML file,
//! `NOT_WOO__`-prefixed environment variables, command line flags.

use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "config/not-woo.yaml";

/// Environment variable prefix; `__` separates nested keys
pub const ENV_PREFIX: &str = "NOT_WOO__";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub shop_settings: shop_settings::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8087)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://not_woo.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive; RUST_LOG takes precedence
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load the layered configuration
    pub fn load(cli: &Cli) -> Result<Self> {
        let path = match &cli.config {
            Some(path) if !path.exists() => {
                bail!("config file {} does not exist", path.display())
            }
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_CONFIG_PATH),
        };

        Self::figment(&path, cli)
            .extract()
            .with_context(|| format!("invalid configuration (file: {})", path.display()))
    }

    fn figment(path: &Path, cli: &Cli) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(bind) = cli.bind {
            figment = figment.merge(Serialized::default("server.bind_addr", bind));
        }
        if let Some(url) = &cli.database_url {
            figment = figment.merge(Serialized::default("database.url", url));
        }
        if let Some(format) = cli.log_format {
            figment = figment.merge(Serialized::default("logging.format", format));
        }
        figment
    }
}
