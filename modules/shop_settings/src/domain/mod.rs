//! Domain layer - business logic and services

pub mod content_types;
pub mod minify;
pub mod repository;
pub mod sanitize;
pub mod schema;
pub mod service;
pub mod validation;

pub use repository::{OptionRepository, PostMetaRepository};
pub use schema::{FieldDescriptor, FieldType, SettingsSchema};
pub use service::Service;
pub use validation::RequestValidator;
