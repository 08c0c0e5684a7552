//! Common test utilities: in-memory repositories and service builders
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use shop_settings::domain::repository::{OptionRepository, PostMetaRepository};
use shop_settings::domain::{Service, SettingsSchema};
use shop_settings::Config;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Build an input map from string pairs
pub fn input(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A complete settings form submission
pub fn full_form() -> HashMap<String, String> {
    input(&[
        ("shop_active", "1"),
        ("shop_image", "banner.png"),
        ("paypal_address", "shop@example.com"),
        ("shop_css", "body { color: red; }"),
        ("shop_js", "var a = 1;\nconsole.log( a );"),
    ])
}

#[derive(Clone, Default)]
pub struct MockOptionRepo {
    data: Arc<RwLock<HashMap<String, Value>>>,
    writes: Arc<RwLock<usize>>,
}

impl MockOptionRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored slot value
    pub fn raw(&self, option_name: &str) -> Option<Value> {
        self.data.read().get(option_name).cloned()
    }

    /// Seed a slot directly
    pub fn seed(&self, option_name: &str, value: Value) {
        self.data.write().insert(option_name.to_string(), value);
    }

    pub fn write_count(&self) -> usize {
        *self.writes.read()
    }
}

#[async_trait]
impl OptionRepository for MockOptionRepo {
    async fn get(&self, option_name: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.data.read().get(option_name).cloned())
    }

    async fn put(&self, option_name: &str, value: &Value) -> anyhow::Result<()> {
        self.data.write().insert(option_name.to_string(), value.clone());
        *self.writes.write() += 1;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockPostMetaRepo {
    data: Arc<RwLock<BTreeMap<(u64, String), String>>>,
}

impl MockPostMetaRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    pub fn raw(&self, post_id: u64, meta_key: &str) -> Option<String> {
        self.data.read().get(&(post_id, meta_key.to_string())).cloned()
    }
}

#[async_trait]
impl PostMetaRepository for MockPostMetaRepo {
    async fn find_by_post(
        &self,
        post_id: u64,
        key_prefix: &str,
    ) -> anyhow::Result<Vec<(String, String)>> {
        Ok(self
            .data
            .read()
            .iter()
            .filter(|((id, key), _)| *id == post_id && key.starts_with(key_prefix))
            .map(|((_, key), value)| (key.clone(), value.clone()))
            .collect())
    }

    async fn upsert(&self, post_id: u64, meta_key: &str, meta_value: &str) -> anyhow::Result<()> {
        self.data
            .write()
            .insert((post_id, meta_key.to_string()), meta_value.to_string());
        Ok(())
    }
}

/// Repository whose every call fails
#[derive(Clone, Default)]
pub struct FailingRepo;

#[async_trait]
impl OptionRepository for FailingRepo {
    async fn get(&self, _option_name: &str) -> anyhow::Result<Option<Value>> {
        Err(anyhow::anyhow!("disk on fire"))
    }

    async fn put(&self, _option_name: &str, _value: &Value) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("disk on fire"))
    }
}

#[async_trait]
impl PostMetaRepository for FailingRepo {
    async fn find_by_post(
        &self,
        _post_id: u64,
        _key_prefix: &str,
    ) -> anyhow::Result<Vec<(String, String)>> {
        Err(anyhow::anyhow!("disk on fire"))
    }

    async fn upsert(&self, _post_id: u64, _meta_key: &str, _meta_value: &str) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("disk on fire"))
    }
}

pub fn build_service(
    option_repo: Arc<dyn OptionRepository>,
    meta_repo: Arc<dyn PostMetaRepository>,
) -> Service {
    Service::new(
        Arc::new(SettingsSchema::shop()),
        Arc::new(SettingsSchema::product_meta()),
        option_repo,
        meta_repo,
        &Config::default(),
    )
}

/// Service over fresh in-memory repositories, plus handles to them
pub fn create_test_service() -> (Service, MockOptionRepo, MockPostMetaRepo) {
    let options = MockOptionRepo::new();
    let meta = MockPostMetaRepo::new();
    let service = build_service(Arc::new(options.clone()), Arc::new(meta.clone()));
    (service, options, meta)
}
