//! Domain service - business logic orchestration

use super::content_types;
use super::repository::{OptionRepository, PostMetaRepository};
use super::schema::SettingsSchema;
use super::validation::validate_product_id;
use crate::config::Config;
use crate::contract::{record_to_json, ContentType, SettingsError, SettingsRecord};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Domain service for shop settings, product meta and content types
pub struct Service {
    settings_schema: Arc<SettingsSchema>,
    meta_schema: Arc<SettingsSchema>,
    option_repo: Arc<dyn OptionRepository>,
    meta_repo: Arc<dyn PostMetaRepository>,
    /// Slot holding the whole settings record
    option_key: String,
    /// Prefix of product meta keys
    meta_prefix: String,
    content_types: Vec<ContentType>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        settings_schema: Arc<SettingsSchema>,
        meta_schema: Arc<SettingsSchema>,
        option_repo: Arc<dyn OptionRepository>,
        meta_repo: Arc<dyn PostMetaRepository>,
        config: &Config,
    ) -> Self {
        Self {
            settings_schema,
            meta_schema,
            option_repo,
            meta_repo,
            option_key: config.option_key(),
            meta_prefix: config.meta_prefix(),
            content_types: content_types::catalog(),
        }
    }

    pub fn settings_schema(&self) -> &SettingsSchema {
        &self.settings_schema
    }

    pub fn meta_schema(&self) -> &SettingsSchema {
        &self.meta_schema
    }

    pub fn option_key(&self) -> &str {
        &self.option_key
    }

    // ===== Settings slot =====

    /// Read the settings record, defaulting every absent field
    pub async fn get_settings(&self) -> Result<SettingsRecord, SettingsError> {
        let stored = self.option_repo.get(&self.option_key).await.map_err(|e| {
            tracing::error!(option = %self.option_key, error = ?e, "Failed to read settings");
            SettingsError::Storage
        })?;

        Ok(self.settings_schema.resolve(stored.as_ref()))
    }

    /// Sanitize, derive and persist the input as the new settings record.
    ///
    /// The slot is fully replaced: fields absent from the input fall back to
    /// their defaults on the next read.
    pub async fn save_settings(
        &self,
        input: HashMap<String, String>,
    ) -> Result<SettingsRecord, SettingsError> {
        let applied = self.settings_schema.apply(&input);
        if !applied.dropped.is_empty() {
            tracing::debug!(dropped = ?applied.dropped, "Ignoring keys not settable in settings schema");
        }

        let value = record_to_json(&applied.record);
        self.option_repo
            .put(&self.option_key, &value)
            .await
            .map_err(|e| {
                tracing::error!(option = %self.option_key, error = ?e, "Failed to write settings");
                SettingsError::Storage
            })?;

        tracing::info!(
            option = %self.option_key,
            fields = applied.record.len(),
            "Settings saved"
        );
        Ok(self.settings_schema.with_defaults(&applied.record))
    }

    // ===== Product meta =====

    /// Read a product's meta record, defaulting every absent key
    pub async fn get_product_meta(&self, product_id: u64) -> Result<SettingsRecord, SettingsError> {
        validate_product_id(product_id)?;

        let rows = self
            .meta_repo
            .find_by_post(product_id, &self.meta_prefix)
            .await
            .map_err(|e| {
                tracing::error!(product_id, error = ?e, "Failed to read product meta");
                SettingsError::Storage
            })?;

        let stored: serde_json::Map<String, Value> = rows
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&self.meta_prefix)
                    .map(|field| (field.to_string(), Value::String(value)))
            })
            .collect();

        Ok(self.meta_schema.resolve(Some(&Value::Object(stored))))
    }

    /// Update the meta keys present in the input; other keys keep their
    /// stored values
    pub async fn save_product_meta(
        &self,
        product_id: u64,
        input: HashMap<String, String>,
    ) -> Result<SettingsRecord, SettingsError> {
        validate_product_id(product_id)?;

        let applied = self.meta_schema.apply(&input);
        if !applied.dropped.is_empty() {
            tracing::debug!(product_id, dropped = ?applied.dropped, "Ignoring unknown product meta keys");
        }

        for (field, value) in &applied.record {
            let meta_key = format!("{}{}", self.meta_prefix, field);
            self.meta_repo
                .upsert(product_id, &meta_key, &value.to_string())
                .await
                .map_err(|e| {
                    tracing::error!(product_id, meta_key = %meta_key, error = ?e, "Failed to write product meta");
                    SettingsError::Storage
                })?;
        }

        tracing::info!(product_id, fields = applied.record.len(), "Product meta saved");
        self.get_product_meta(product_id).await
    }

    // ===== Content types =====

    pub fn list_content_types(&self) -> Vec<ContentType> {
        self.content_types.clone()
    }

    pub fn get_content_type(&self, name: &str) -> Result<ContentType, SettingsError> {
        self.content_types
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or_else(|| SettingsError::NotFound {
                resource: "content_type".to_string(),
                id: name.to_string(),
            })
    }
}
