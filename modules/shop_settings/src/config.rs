//! Configuration for shop settings module

use serde::{Deserialize, Serialize};

/// A bearer credential and the capabilities it grants
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiToken {
    /// Opaque token value presented by the caller
    pub token: String,

    /// User the token belongs to, for logging
    #[serde(default)]
    pub user: Option<String>,

    /// Granted capabilities (e.g. "manage_options")
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// Shop settings configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Plugin name; prefixes the API path, the settings slot and meta keys
    #[serde(default = "default_plugin")]
    pub plugin: String,

    /// Maximum request body size in bytes
    #[serde(default = "default_max_data_size")]
    pub max_data_size: usize,

    /// Accepted API tokens
    #[serde(default)]
    pub tokens: Vec<ApiToken>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plugin: default_plugin(),
            max_data_size: default_max_data_size(),
            tokens: Vec::new(),
        }
    }
}

impl Config {
    /// Option slot holding the settings record
    pub fn option_key(&self) -> String {
        format!("{}-settings", self.plugin)
    }

    /// Prefix of product meta keys
    pub fn meta_prefix(&self) -> String {
        format!("_{}-product_", self.plugin)
    }

    /// Path the REST routes are nested under
    pub fn api_prefix(&self) -> String {
        format!("/{}-plugin-api/v1", self.plugin)
    }
}

fn default_plugin() -> String {
    "not_woo".to_string()
}

fn default_max_data_size() -> usize {
    1024 * 1024 // 1MB
}
