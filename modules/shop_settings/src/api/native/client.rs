//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{ContentType, SettingsError, SettingsRecord, ShopSettingsApi};
use crate::domain::Service;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ShopSettingsApi for NativeClient {
    async fn get_settings(&self) -> Result<SettingsRecord, SettingsError> {
        self.service.get_settings().await
    }

    async fn save_settings(
        &self,
        input: HashMap<String, String>,
    ) -> Result<SettingsRecord, SettingsError> {
        self.service.save_settings(input).await
    }

    async fn get_product_meta(&self, product_id: u64) -> Result<SettingsRecord, SettingsError> {
        self.service.get_product_meta(product_id).await
    }

    async fn save_product_meta(
        &self,
        product_id: u64,
        input: HashMap<String, String>,
    ) -> Result<SettingsRecord, SettingsError> {
        self.service.save_product_meta(product_id, input).await
    }

    async fn list_content_types(&self) -> Result<Vec<ContentType>, SettingsError> {
        Ok(self.service.list_content_types())
    }

    async fn get_content_type(&self, name: &str) -> Result<ContentType, SettingsError> {
        self.service.get_content_type(name)
    }
}
