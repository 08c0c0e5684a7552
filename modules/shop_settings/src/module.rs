//! Module declaration and lifecycle: config, migrations, wiring, routes

use crate::api::rest::auth::TokenRegistry;
use crate::config::Config;
use crate::contract::ShopSettingsApi;
use crate::domain::{Service, SettingsSchema};
use crate::infra::storage::{SeaOrmOptionRepository, SeaOrmPostMetaRepository};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shop settings module
pub struct ShopSettingsModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for ShopSettingsModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ShopSettingsModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Run database migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Shop settings migrations completed");
        Ok(())
    }

    /// Build repositories and the domain service
    pub fn init(&self, db: DatabaseConnection) -> Result<()> {
        let conn = Arc::new(db);
        let config = self.config.read().clone();

        // Build repositories
        let option_repo = Arc::new(SeaOrmOptionRepository::new(conn.clone()));
        let meta_repo = Arc::new(SeaOrmPostMetaRepository::new(conn));

        // Schemas are fixed at startup and shared read-only
        let service = Arc::new(Service::new(
            Arc::new(SettingsSchema::shop()),
            Arc::new(SettingsSchema::product_meta()),
            option_repo,
            meta_repo,
            &config,
        ));
        *self.service.write() = Some(service);

        tracing::info!(
            plugin = %config.plugin,
            option = %config.option_key(),
            tokens = config.tokens.len(),
            "Shop settings service initialized"
        );
        Ok(())
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn ShopSettingsApi>> {
        Ok(Arc::new(crate::api::native::NativeClient::new(self.service()?)))
    }

    /// Register REST routes under the plugin API prefix
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;
        let config = self.config.read().clone();

        tracing::info!(prefix = %config.api_prefix(), "Registering shop settings REST routes");
        crate::api::rest::routes::register_routes(
            router,
            &config.api_prefix(),
            service,
            Arc::new(TokenRegistry::new(&config.tokens)),
            config.max_data_size,
        )
    }
}
