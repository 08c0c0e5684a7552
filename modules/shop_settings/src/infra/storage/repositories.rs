//! SeaORM repository implementations

use crate::domain::repository::{OptionRepository, PostMetaRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde_json::Value;
use std::sync::Arc;

use super::{entity, mapper};

// ===== Option Repository =====

pub struct SeaOrmOptionRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOptionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OptionRepository for SeaOrmOptionRepository {
    async fn get(&self, option_name: &str) -> Result<Option<Value>> {
        let result = entity::Entity::find_by_id(option_name.to_string())
            .one(&*self.db)
            .await?;

        Ok(result.map(|row| row.option_value))
    }

    async fn put(&self, option_name: &str, value: &Value) -> Result<()> {
        // Single statement upsert: concurrent writers are last-writer-wins
        entity::Entity::insert(mapper::option_active_model(option_name, value))
            .on_conflict(
                OnConflict::column(entity::Column::OptionName)
                    .update_columns([entity::Column::OptionValue, entity::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        Ok(())
    }
}

// ===== Post Meta Repository =====

pub struct SeaOrmPostMetaRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPostMetaRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostMetaRepository for SeaOrmPostMetaRepository {
    async fn find_by_post(&self, post_id: u64, key_prefix: &str) -> Result<Vec<(String, String)>> {
        let results = entity::post_meta::Entity::find()
            .filter(entity::post_meta::Column::PostId.eq(i64::try_from(post_id)?))
            .filter(entity::post_meta::Column::MetaKey.starts_with(key_prefix))
            .order_by_asc(entity::post_meta::Column::MetaKey)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|row| row.into()).collect())
    }

    async fn upsert(&self, post_id: u64, meta_key: &str, meta_value: &str) -> Result<()> {
        let active = mapper::post_meta_active_model(i64::try_from(post_id)?, meta_key, meta_value);

        entity::post_meta::Entity::insert(active)
            .on_conflict(
                OnConflict::columns([
                    entity::post_meta::Column::PostId,
                    entity::post_meta::Column::MetaKey,
                ])
                .update_columns([
                    entity::post_meta::Column::MetaValue,
                    entity::post_meta::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        Ok(())
    }
}
