//! Contract models for shop settings
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use indexmap::IndexMap;

/// Capability required to read or write shop settings
pub const MANAGE_OPTIONS: &str = "manage_options";

/// A single scalar setting value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Unsigned integer field
    Integer(u64),
    /// Plain text field
    Text(String),
}

impl FieldValue {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            Self::Integer(_) => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<&FieldValue> for serde_json::Value {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Integer(v) => serde_json::Value::from(*v),
            FieldValue::Text(v) => serde_json::Value::String(v.clone()),
        }
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Field name to value, in schema order
pub type SettingsRecord = IndexMap<String, FieldValue>;

/// Flat JSON object form of a record, used for storage and transport
pub fn record_to_json(record: &SettingsRecord) -> serde_json::Value {
    serde_json::Value::Object(
        record
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
            .collect(),
    )
}

/// Kind of content declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    PostType,
    Taxonomy,
}

/// A content type the shop declares to the host (post type or taxonomy)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Machine name (e.g. "product")
    pub name: String,
    /// Post type or taxonomy
    pub kind: ContentKind,
    /// Whether entries may have parents
    pub hierarchical: bool,
    /// Editor features (post types only)
    pub supports: Vec<String>,
    /// Post types a taxonomy attaches to
    pub object_types: Vec<String>,
    /// Whether the type is exposed in the host REST API
    pub show_in_rest: bool,
    /// Rewrite slug
    pub slug: String,
    /// Admin labels keyed by label name
    pub labels: IndexMap<String, String>,
}

/// Authentication context resolved at the boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// Optional user identifier for audit logging
    pub user: Option<String>,
    /// Capabilities granted to the caller
    pub capabilities: Vec<String>,
}

impl AuthContext {
    pub fn new(user: Option<String>, capabilities: Vec<String>) -> Self {
        Self { user, capabilities }
    }

    /// Check whether the caller holds a capability
    pub fn can(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }
}
