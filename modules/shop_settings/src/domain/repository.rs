//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Named option slots, each holding one structured value
#[async_trait]
pub trait OptionRepository: Send + Sync {
    /// Read a slot; `None` when it was never written
    async fn get(&self, option_name: &str) -> Result<Option<Value>>;

    /// Replace a slot's value
    async fn put(&self, option_name: &str, value: &Value) -> Result<()>;
}

/// Per-post key/value metadata
#[async_trait]
pub trait PostMetaRepository: Send + Sync {
    /// All meta rows of a post whose key starts with `key_prefix`, as
    /// (full key, value) pairs
    async fn find_by_post(&self, post_id: u64, key_prefix: &str) -> Result<Vec<(String, String)>>;

    /// Insert or replace one meta row
    async fn upsert(&self, post_id: u64, meta_key: &str, meta_value: &str) -> Result<()>;
}
