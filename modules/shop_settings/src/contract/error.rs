//! Contract error types for shop settings
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Shop settings domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Caller did not present a recognised credential
    #[error("Authentication required")]
    Unauthorized,

    /// Caller is authenticated but lacks the capability
    #[error("Missing capability: {capability}")]
    Forbidden {
        /// Capability that was required
        capability: String,
    },

    /// Request-level validation error
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },

    /// Request body did not satisfy the generated JSON Schema
    #[error("Schema validation failed: {}", errors.join(", "))]
    SchemaValidation {
        /// Validation errors
        errors: Vec<String>,
    },

    /// Unknown resource
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (content_type, ...)
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// Persistent storage failed; details are logged, never exposed
    #[error("Storage error")]
    Storage,
}
