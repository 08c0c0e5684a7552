//! Capability gate for the REST routes
//!
//! Callers present `Authorization: Bearer <token>` or `X-WP-Nonce: <token>`.
//! The resolved [`AuthContext`] is stored in request extensions.

use super::error::{map_domain_error, Problem};
use crate::config::ApiToken;
use crate::contract::{AuthContext, SettingsError};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Header carrying the admin nonce
pub const NONCE_HEADER: &str = "x-wp-nonce";

/// Token value -> granted context
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: HashMap<String, AuthContext>,
}

impl TokenRegistry {
    pub fn new(tokens: &[ApiToken]) -> Self {
        Self {
            tokens: tokens
                .iter()
                .map(|t| {
                    (
                        t.token.clone(),
                        AuthContext::new(t.user.clone(), t.capabilities.clone()),
                    )
                })
                .collect(),
        }
    }

    fn presented_token(headers: &HeaderMap) -> Option<&str> {
        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim);
        bearer.or_else(|| {
            headers
                .get(NONCE_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
        })
    }

    /// Resolve the caller from request headers
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthContext, SettingsError> {
        Self::presented_token(headers)
            .filter(|t| !t.is_empty())
            .and_then(|t| self.tokens.get(t))
            .cloned()
            .ok_or(SettingsError::Unauthorized)
    }

    /// Resolve the caller and require a capability
    pub fn authorize(
        &self,
        headers: &HeaderMap,
        capability: &str,
    ) -> Result<AuthContext, SettingsError> {
        let ctx = self.authenticate(headers)?;
        if !ctx.can(capability) {
            return Err(SettingsError::Forbidden {
                capability: capability.to_string(),
            });
        }
        Ok(ctx)
    }
}

/// Gate state: the registry plus the capability every route requires
#[derive(Debug, Clone)]
pub struct CapabilityGate {
    pub registry: Arc<TokenRegistry>,
    pub capability: &'static str,
}

/// Middleware rejecting callers without the gate's capability
pub async fn require_capability(
    State(gate): State<CapabilityGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, Problem> {
    let ctx = gate
        .registry
        .authorize(req.headers(), gate.capability)
        .map_err(|e| {
            tracing::debug!(path = %req.uri().path(), error = %e, "Rejected request");
            map_domain_error(e)
        })?;
    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}
