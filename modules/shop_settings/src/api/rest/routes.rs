//! Route registration

use super::{
    auth::{require_capability, CapabilityGate, TokenRegistry},
    dto::*,
    error::Problem,
    handlers::{self, FieldInput, ProductId},
};
use crate::contract::MANAGE_OPTIONS;
use crate::domain::{RequestValidator, Service};
use axum::{
    extract::{DefaultBodyLimit, Path},
    middleware,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register all REST routes under `prefix`, gated on `manage_options`
pub fn register_routes(
    router: Router,
    prefix: &str,
    service: Arc<Service>,
    tokens: Arc<TokenRegistry>,
    max_data_size: usize,
) -> anyhow::Result<Router> {
    let validator = Arc::new(
        RequestValidator::for_schema(service.settings_schema())
            .map_err(|e| anyhow::anyhow!("settings request schema: {}", e))?,
    );

    let gate = CapabilityGate {
        registry: tokens,
        capability: MANAGE_OPTIONS,
    };

    let api = Router::new()
        // Settings endpoints
        .route("/settings", get(get_settings_handler).post(save_settings_handler))
        // Product meta endpoints
        .route(
            "/products/{product_id}/meta",
            get(get_product_meta_handler).post(save_product_meta_handler),
        )
        // Content type endpoints
        .route("/content-types", get(list_content_types_handler))
        .route("/content-types/{name}", get(get_content_type_handler))
        .route_layer(middleware::from_fn_with_state(gate, require_capability))
        .layer(DefaultBodyLimit::max(max_data_size))
        // Add service and validator as extensions for handlers
        .layer(Extension(service))
        .layer(Extension(validator));

    Ok(router.nest(prefix, api))
}

// ===== Handler wrappers that extract state from Extension =====

async fn get_settings_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<RecordDto>, Problem> {
    handlers::get_settings(service).await
}

async fn save_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(validator): Extension<Arc<RequestValidator>>,
    input: FieldInput,
) -> Result<(axum::http::StatusCode, Json<RecordDto>), Problem> {
    handlers::save_settings(service, validator, input).await
}

async fn get_product_meta_handler(
    Extension(service): Extension<Arc<Service>>,
    path: ProductId,
) -> Result<Json<RecordDto>, Problem> {
    handlers::get_product_meta(service, path).await
}

async fn save_product_meta_handler(
    Extension(service): Extension<Arc<Service>>,
    path: ProductId,
    input: FieldInput,
) -> Result<Json<RecordDto>, Problem> {
    handlers::save_product_meta(service, path, input).await
}

async fn list_content_types_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<ContentTypesListResponse>, Problem> {
    handlers::list_content_types(service).await
}

async fn get_content_type_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
) -> Result<Json<ContentTypeDto>, Problem> {
    handlers::get_content_type(service, path).await
}
