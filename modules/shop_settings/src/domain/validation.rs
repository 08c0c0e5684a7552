//! Request validation at the boundary, before the store runs

use super::schema::SettingsSchema;
use crate::contract::SettingsError;
use jsonschema::Validator;
use serde_json::Value;
use std::collections::HashMap;

/// Validate a product (post) identifier
pub fn validate_product_id(product_id: u64) -> Result<(), SettingsError> {
    if product_id == 0 {
        return Err(SettingsError::Validation {
            message: "product_id must be a positive integer".to_string(),
        });
    }
    Ok(())
}

fn compile(schema: &Value) -> Result<Validator, SettingsError> {
    Validator::new(schema).map_err(|e| SettingsError::Validation {
        message: format!("Invalid JSON Schema: {}", e),
    })
}

fn collect_errors(validator: &Validator, data: &Value) -> Result<(), SettingsError> {
    let mut errors: Vec<String> = validator.iter_errors(data).map(|e| e.to_string()).collect();
    if errors.is_empty() {
        return Ok(());
    }
    errors.sort();
    Err(SettingsError::SchemaValidation { errors })
}

/// Compiled request schema for one settings schema
pub struct RequestValidator {
    validator: Validator,
}

impl RequestValidator {
    pub fn for_schema(schema: &SettingsSchema) -> Result<Self, SettingsError> {
        Ok(Self {
            validator: compile(&schema.request_json_schema())?,
        })
    }

    /// Check that every required field is present
    pub fn validate(&self, input: &HashMap<String, String>) -> Result<(), SettingsError> {
        let body: serde_json::Map<String, Value> = input
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        collect_errors(&self.validator, &Value::Object(body))
    }
}
