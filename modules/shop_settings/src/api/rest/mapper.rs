//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, ContentKind, FieldValue};
use serde_json::Value;

// ===== Record conversions =====

/// Render a record as its flat JSON object
pub fn record_to_dto(record: contract::SettingsRecord) -> RecordDto {
    record
        .into_iter()
        .map(|(name, value)| {
            let json = match value {
                FieldValue::Integer(v) => Value::from(v),
                FieldValue::Text(v) => Value::String(v),
            };
            (name, json)
        })
        .collect()
}

/// Transport values arrive as strings; JSON bodies may carry other scalars,
/// which are stringified the same way a form would send them
pub fn json_to_field_input(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(b) => if b { "1" } else { "0" }.to_string(),
        other => other.to_string(),
    }
}

// ===== Content type conversions =====

impl From<contract::ContentType> for ContentTypeDto {
    fn from(content_type: contract::ContentType) -> Self {
        Self {
            name: content_type.name,
            kind: match content_type.kind {
                ContentKind::PostType => "post_type",
                ContentKind::Taxonomy => "taxonomy",
            }
            .to_string(),
            hierarchical: content_type.hierarchical,
            supports: content_type.supports,
            object_types: content_type.object_types,
            show_in_rest: content_type.show_in_rest,
            slug: content_type.slug,
            labels: content_type.labels,
        }
    }
}
