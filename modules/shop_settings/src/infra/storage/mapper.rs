//! Entity to model mappers
//!
//! Conversions between SeaORM entities and the plain values the repositories
//! exchange with the domain

use super::entity;
use sea_orm::ActiveValue::Set;

// ===== Option slot =====

pub fn option_active_model(option_name: &str, value: &serde_json::Value) -> entity::ActiveModel {
    entity::ActiveModel {
        option_name: Set(option_name.to_string()),
        option_value: Set(value.clone()),
        updated_at: Set(chrono::Utc::now()),
    }
}

// ===== Post meta =====

impl From<entity::post_meta::Model> for (String, String) {
    fn from(row: entity::post_meta::Model) -> Self {
        (row.meta_key, row.meta_value)
    }
}

pub fn post_meta_active_model(
    post_id: i64,
    meta_key: &str,
    meta_value: &str,
) -> entity::post_meta::ActiveModel {
    entity::post_meta::ActiveModel {
        post_id: Set(post_id),
        meta_key: Set(meta_key.to_string()),
        meta_value: Set(meta_value.to_string()),
        updated_at: Set(chrono::Utc::now()),
    }
}
