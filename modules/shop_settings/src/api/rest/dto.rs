//! REST DTOs with serde derives for HTTP API

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Settings or product meta record: a flat object of field name to scalar
pub type RecordDto = serde_json::Map<String, serde_json::Value>;

// ===== Content type DTOs =====

/// Content type response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentTypeDto {
    /// Machine name
    #[schema(example = "product")]
    pub name: String,

    /// "post_type" or "taxonomy"
    #[schema(example = "post_type")]
    pub kind: String,

    /// Whether entries may have parents
    pub hierarchical: bool,

    /// Editor features (post types only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supports: Vec<String>,

    /// Post types a taxonomy attaches to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub object_types: Vec<String>,

    /// Whether the type is exposed in the host REST API
    pub show_in_rest: bool,

    /// Rewrite slug
    pub slug: String,

    /// Admin labels
    #[schema(value_type = Object)]
    pub labels: IndexMap<String, String>,
}

/// List of content types
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContentTypesListResponse {
    /// List of content types
    pub items: Vec<ContentTypeDto>,

    /// Total count
    pub total: usize,
}

// Note: Conversion implementations live in mapper.rs
