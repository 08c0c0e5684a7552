//! Database migrations for shop settings

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_options::Migration),
            Box::new(m20250601_000002_create_postmeta::Migration),
        ]
    }
}

mod m20250601_000001_create_options;
mod m20250601_000002_create_postmeta;
