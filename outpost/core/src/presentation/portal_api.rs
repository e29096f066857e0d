// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Portal (relay) HTTP surface.
//!
//! `GET /check_auth` forwards the caller's `Authorization` header to the
//! validation service and republishes the response verbatim: same status,
//! same body, rejections included. The portal never interprets, caches, or
//! rewrites what the upstream said. An unreachable upstream is a 502, not a
//! silent grant.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::infrastructure::upstream::ValidationUpstream;

pub fn app(upstream: Arc<ValidationUpstream>) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/check_auth", get(check_auth))
        .layer(TraceLayer::new_for_http())
        .with_state(upstream)
}

async fn read_root() -> impl IntoResponse {
    Json(json!({ "message": "Hello from Agent Portal!" }))
}

async fn check_auth(
    State(upstream): State<Arc<ValidationUpstream>>,
    headers: HeaderMap,
) -> Response {
    match upstream.forward(headers.get(header::AUTHORIZATION)).await {
        Ok(reply) => {
            let status =
                StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            let mut response = (status, reply.body).into_response();
            match reply.content_type {
                Some(content_type) => {
                    response
                        .headers_mut()
                        .insert(header::CONTENT_TYPE, content_type);
                }
                None => {
                    response.headers_mut().remove(header::CONTENT_TYPE);
                }
            }
            response
        }
        Err(err) => {
            warn!(error = %err, "relay to validation service failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "detail": err.to_string() })),
            )
                .into_response()
        }
    }
}
