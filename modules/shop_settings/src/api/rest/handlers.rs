//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    mapper::{json_to_field_input, record_to_dto},
};
use crate::domain::{RequestValidator, Service};
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, StatusCode},
    Form, Json,
};
use std::collections::HashMap;
use std::sync::Arc;

// ===== Body extraction =====

/// Field name -> raw string value, from a form-encoded or JSON object body
#[derive(Debug, Clone, Default)]
pub struct FieldInput(pub HashMap<String, String>);

impl<S> FromRequest<S> for FieldInput
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(body) = Json::<serde_json::Map<String, serde_json::Value>>::from_request(req, state)
                .await
                .map_err(|e| {
                    Problem::new(e.status(), "Invalid Request Body").with_detail(e.body_text())
                })?;
            return Ok(Self(
                body.into_iter()
                    .map(|(k, v)| (k, json_to_field_input(v)))
                    .collect(),
            ));
        }

        let Form(body) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|e| Problem::new(e.status(), "Invalid Request Body").with_detail(e.body_text()))?;
        Ok(Self(body))
    }
}

/// Product id from the `{product_id}` path segment
#[derive(Debug, Clone, Copy)]
pub struct ProductId(pub u64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(product_id) = Path::<u64>::from_request_parts(parts, state)
            .await
            .map_err(|e| Problem::new(e.status(), "Invalid Product Id").with_detail(e.body_text()))?;
        Ok(Self(product_id))
    }
}

// ===== Settings Handlers =====

/// Get the full settings record
pub async fn get_settings(service: Arc<Service>) -> Result<Json<RecordDto>, Problem> {
    let record = service.get_settings().await.map_err(map_domain_error)?;
    Ok(Json(record_to_dto(record)))
}

/// Replace the settings record; every required field must be supplied
pub async fn save_settings(
    service: Arc<Service>,
    validator: Arc<RequestValidator>,
    FieldInput(input): FieldInput,
) -> Result<(StatusCode, Json<RecordDto>), Problem> {
    validator.validate(&input).map_err(map_domain_error)?;

    let record = service.save_settings(input).await.map_err(map_domain_error)?;

    Ok((StatusCode::OK, Json(record_to_dto(record))))
}

// ===== Product Meta Handlers =====

/// Get a product's meta record
pub async fn get_product_meta(
    service: Arc<Service>,
    ProductId(product_id): ProductId,
) -> Result<Json<RecordDto>, Problem> {
    let record = service
        .get_product_meta(product_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(record_to_dto(record)))
}

/// Update the supplied meta keys of a product
pub async fn save_product_meta(
    service: Arc<Service>,
    ProductId(product_id): ProductId,
    FieldInput(input): FieldInput,
) -> Result<Json<RecordDto>, Problem> {
    let record = service
        .save_product_meta(product_id, input)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(record_to_dto(record)))
}

// ===== Content Type Handlers =====

/// List declared post types and taxonomies
pub async fn list_content_types(
    service: Arc<Service>,
) -> Result<Json<ContentTypesListResponse>, Problem> {
    let items: Vec<ContentTypeDto> = service
        .list_content_types()
        .into_iter()
        .map(|ct| ct.into())
        .collect();
    let total = items.len();

    Ok(Json(ContentTypesListResponse { items, total }))
}

/// Get a specific content type
pub async fn get_content_type(
    service: Arc<Service>,
    Path(name): Path<String>,
) -> Result<Json<ContentTypeDto>, Problem> {
    let content_type = service.get_content_type(&name).map_err(map_domain_error)?;

    Ok(Json(content_type.into()))
}
