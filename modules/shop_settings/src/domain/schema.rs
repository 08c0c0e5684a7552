//! Settings schema - the fixed field catalog a store validates against
//!
//! A schema is built once at startup and handed to the service; nothing
//! mutates it afterwards. It owns every per-field rule: type coercion,
//! sanitization, defaults and derive rules.

use super::minify::{minify_css, minify_js};
use super::sanitize::{absint, sanitize_text_field, sanitize_textarea_field};
use crate::contract::{FieldValue, SettingsRecord};
use indexmap::IndexMap;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Text,
}

/// Computes a derived field from the sanitized source value
#[derive(Clone, Copy)]
pub struct DeriveRule {
    /// Name of the derived field
    pub target: &'static str,
    /// Pure transform of the source value
    pub compute: fn(&str) -> String,
}

impl std::fmt::Debug for DeriveRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeriveRule")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Per-field rules
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub field_type: FieldType,
    pub default: FieldValue,
    /// Must be present in every POST
    pub required: bool,
    /// Text keeps line breaks and tabs
    pub multiline: bool,
    /// Value is computed from another field, never taken from input
    pub derived: bool,
    pub derive: Option<DeriveRule>,
}

impl FieldDescriptor {
    pub fn integer(default: u64) -> Self {
        Self {
            field_type: FieldType::Integer,
            default: FieldValue::Integer(default),
            required: false,
            multiline: false,
            derived: false,
            derive: None,
        }
    }

    pub fn text(default: &str) -> Self {
        Self {
            field_type: FieldType::Text,
            default: FieldValue::Text(default.to_string()),
            required: false,
            multiline: false,
            derived: false,
            derive: None,
        }
    }

    /// A text field whose value only ever comes from a derive rule
    pub fn derived_text() -> Self {
        Self {
            derived: true,
            ..Self::text("")
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn derives(mut self, target: &'static str, compute: fn(&str) -> String) -> Self {
        self.derive = Some(DeriveRule { target, compute });
        self
    }

    /// Coerce a raw transport string into this field's value
    pub fn coerce(&self, raw: &str) -> FieldValue {
        match self.field_type {
            FieldType::Integer => FieldValue::Integer(absint(raw)),
            FieldType::Text if self.multiline => FieldValue::Text(sanitize_textarea_field(raw)),
            FieldType::Text => FieldValue::Text(sanitize_text_field(raw)),
        }
    }

    /// Read a previously stored JSON value; mismatched shapes fall back to
    /// the same coercion as input, anything else to the default
    pub fn from_stored(&self, stored: &Value) -> FieldValue {
        match (self.field_type, stored) {
            (FieldType::Integer, Value::Number(n)) => FieldValue::Integer(
                n.as_u64()
                    .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
                    .unwrap_or(0),
            ),
            (FieldType::Integer, Value::String(s)) => FieldValue::Integer(absint(s)),
            (FieldType::Integer, Value::Bool(b)) => FieldValue::Integer(u64::from(*b)),
            (FieldType::Text, Value::String(s)) => FieldValue::Text(s.clone()),
            (FieldType::Text, Value::Number(n)) => FieldValue::Text(n.to_string()),
            _ => self.default.clone(),
        }
    }
}

/// Result of applying raw input to a schema
#[derive(Debug, Clone, Default)]
pub struct AppliedInput {
    /// Sanitized and derived values, in schema order
    pub record: SettingsRecord,
    /// Input keys that were discarded (unknown or derived)
    pub dropped: Vec<String>,
}

/// Ordered field catalog
#[derive(Debug, Clone, Default)]
pub struct SettingsSchema {
    fields: IndexMap<String, FieldDescriptor>,
}

impl SettingsSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: &str, descriptor: FieldDescriptor) -> Self {
        self.fields.insert(name.to_string(), descriptor);
        self
    }

    /// The shop settings form
    pub fn shop() -> Self {
        Self::new()
            .with_field("shop_active", FieldDescriptor::integer(1).required())
            .with_field("shop_image", FieldDescriptor::text("").required())
            .with_field("paypal_address", FieldDescriptor::text("").required())
            .with_field(
                "shop_css",
                FieldDescriptor::text("")
                    .required()
                    .multiline()
                    .derives("shop_css_minified", minify_css),
            )
            .with_field("shop_css_minified", FieldDescriptor::derived_text())
            .with_field(
                "shop_js",
                FieldDescriptor::text("")
                    .required()
                    .multiline()
                    .derives("shop_js_minified", minify_js),
            )
            .with_field("shop_js_minified", FieldDescriptor::derived_text())
    }

    /// Per-product metadata
    pub fn product_meta() -> Self {
        Self::new()
            .with_field("sku", FieldDescriptor::text(""))
            .with_field("price", FieldDescriptor::text(""))
            .with_field("desc", FieldDescriptor::text("").multiline())
            .with_field("data", FieldDescriptor::text("").multiline())
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields every POST must carry
    pub fn required_fields(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, d)| d.required)
            .map(|(name, _)| name)
            .collect()
    }

    /// Every field at its default
    pub fn defaults(&self) -> SettingsRecord {
        self.iter()
            .map(|(name, d)| (name.to_string(), d.default.clone()))
            .collect()
    }

    /// Resolve a stored slot value: stored value per field, else default.
    /// A missing or non-object slot is the all-defaults case.
    pub fn resolve(&self, stored: Option<&Value>) -> SettingsRecord {
        let Some(Value::Object(map)) = stored else {
            return self.defaults();
        };
        self.iter()
            .map(|(name, d)| {
                let value = map
                    .get(name)
                    .map_or_else(|| d.default.clone(), |v| d.from_stored(v));
                (name.to_string(), value)
            })
            .collect()
    }

    /// Overlay a partial record onto the defaults, in schema order
    pub fn with_defaults(&self, record: &SettingsRecord) -> SettingsRecord {
        self.iter()
            .map(|(name, d)| {
                let value = record.get(name).cloned().unwrap_or_else(|| d.default.clone());
                (name.to_string(), value)
            })
            .collect()
    }

    /// Sanitize input, compute derived fields and drop everything the caller
    /// may not set. Only keys present in the input (and their derived
    /// counterparts) end up in the record.
    pub fn apply(&self, input: &HashMap<String, String>) -> AppliedInput {
        let mut values: HashMap<&str, FieldValue> = HashMap::new();

        for (name, descriptor) in self.iter() {
            if descriptor.derived {
                continue;
            }
            let Some(raw) = input.get(name) else {
                continue;
            };
            let value = descriptor.coerce(raw);
            if let Some(rule) = descriptor.derive {
                let source = match &value {
                    FieldValue::Text(s) => s.clone(),
                    FieldValue::Integer(n) => n.to_string(),
                };
                values.insert(rule.target, FieldValue::Text((rule.compute)(&source)));
            }
            values.insert(name, value);
        }

        let record = self
            .iter()
            .filter_map(|(name, _)| values.remove(name).map(|v| (name.to_string(), v)))
            .collect();

        let mut dropped: Vec<String> = input
            .keys()
            .filter(|key| self.get(key).is_none_or(|d| d.derived))
            .cloned()
            .collect();
        dropped.sort();

        AppliedInput { record, dropped }
    }

    /// JSON Schema for a POST body: an object of strings with the required
    /// fields listed
    pub fn request_json_schema(&self) -> Value {
        let properties: serde_json::Map<String, Value> = self
            .iter()
            .filter(|(_, d)| !d.derived)
            .map(|(name, _)| (name.to_string(), json!({ "type": "string" })))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_fields(),
            "additionalProperties": { "type": "string" }
        })
    }
}
