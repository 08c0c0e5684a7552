//! Shop Settings Module
//!
//! Schema-validated settings store for the not_woo shop admin: one settings
//! record in a single option slot, per-product metadata, and the catalog of
//! content types the shop declares.

// Public exports
pub mod contract;
pub use contract::{
    client::ShopSettingsApi, error::SettingsError, AuthContext, ContentKind, ContentType,
    FieldValue, SettingsRecord,
};

pub mod module;
pub use module::ShopSettingsModule;

pub mod config;
pub use config::{ApiToken, Config};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
