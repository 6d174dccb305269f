// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Request context middleware for the benchmarks API.
//!
//! Assigns every request an identifier, taken from the caller's
//! `x-request-id` header when present and generated otherwise, runs the
//! request inside a span carrying it, injects a [`RequestContext`] into the
//! request extensions and echoes the identifier on the response.

use axum::{
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::error::ApiError;

/// Header carrying the request identifier.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Incoming identifiers longer than this are replaced.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Configuration for the request context middleware.
#[derive(Debug, Clone)]
pub struct RequestContextConfig {
    /// Service name recorded on the request span.
    pub service_name: String,
    /// Reuse a caller-supplied `x-request-id` instead of always generating one.
    pub trust_incoming: bool,
}

impl RequestContextConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            trust_incoming: true,
        }
    }

    /// Always generate identifiers, ignoring the caller's header.
    pub fn generate_only(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            trust_incoming: false,
        }
    }
}

/// Per-request data available to handlers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub received_at: DateTime<Utc>,
}

fn incoming_id(req: &Request) -> Option<String> {
    req.headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
}

/// Middleware establishing the [`RequestContext`].
pub async fn request_context_middleware(
    config: RequestContextConfig,
    mut req: Request,
    next: Next,
) -> Response {
    let request_id = config
        .trust_incoming
        .then(|| incoming_id(&req))
        .flatten()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = info_span!(
        "request",
        service = %config.service_name,
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let received_at = Utc::now();
    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
        received_at,
    });

    let mut response = next.run(req).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }
    debug!(
        request_id = %request_id,
        status = %response.status(),
        elapsed_ms = (Utc::now() - received_at).num_milliseconds(),
        "Request completed"
    );
    response
}

/// Extractor for the [`RequestContext`] set by the middleware.
///
/// ```ignore
/// async fn handler(ReqContext(ctx): ReqContext) -> impl IntoResponse {
///     // ctx.request_id
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ReqContext(pub RequestContext);

impl std::ops::Deref for ReqContext {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for ReqContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(ReqContext)
            .ok_or_else(|| {
                ApiError::internal("request context not found; is the middleware applied?")
            })
    }
}
