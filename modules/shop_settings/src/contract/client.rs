//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with shop settings.
//! NO HTTP - direct function calls. Callers are expected to have checked
//! capabilities already; the store does not authorize.

use super::{
    error::SettingsError,
    model::{ContentType, SettingsRecord},
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Shop settings API for inter-module communication
#[async_trait]
pub trait ShopSettingsApi: Send + Sync {
    // ===== Settings slot =====

    /// Read the full, defaulted settings record
    async fn get_settings(&self) -> Result<SettingsRecord, SettingsError>;

    /// Replace the settings record with the sanitized input
    async fn save_settings(
        &self,
        input: HashMap<String, String>,
    ) -> Result<SettingsRecord, SettingsError>;

    // ===== Product meta =====

    /// Read the defaulted meta record of a product
    async fn get_product_meta(&self, product_id: u64) -> Result<SettingsRecord, SettingsError>;

    /// Update the meta keys present in the input
    async fn save_product_meta(
        &self,
        product_id: u64,
        input: HashMap<String, String>,
    ) -> Result<SettingsRecord, SettingsError>;

    // ===== Content types =====

    /// List declared post types and taxonomies
    async fn list_content_types(&self) -> Result<Vec<ContentType>, SettingsError>;

    /// Get a content type by name
    async fn get_content_type(&self, name: &str) -> Result<ContentType, SettingsError>;
}
