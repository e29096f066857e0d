// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Validation service HTTP surface.
//!
//! `GET /validate` with `Authorization: Bearer <AgentID>` returns 200 with
//! the granted result, 401 for malformed credentials, 403 for unknown
//! agents. Rejection bodies are `{"detail": "..."}`.

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

use crate::application::validation_service::ValidationService;
use crate::domain::validation::ValidationError;

pub fn app(service: Arc<ValidationService>) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/validate", get(validate))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn read_root() -> impl IntoResponse {
    Json(json!({ "message": "Hello from Mission Service!" }))
}

async fn validate(
    State(service): State<Arc<ValidationService>>,
    headers: HeaderMap,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match service.validate(authorization) {
        Ok(result) => Json(result).into_response(),
        Err(err) => rejection(err),
    }
}

fn rejection(err: ValidationError) -> Response {
    let status = match err {
        ValidationError::MalformedCredential => StatusCode::UNAUTHORIZED,
        ValidationError::UnknownAgent => StatusCode::FORBIDDEN,
    };
    (status, Json(json!({ "detail": err.to_string() }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mission::MissionDirectory;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(Arc::new(ValidationService::new(Arc::new(
            MissionDirectory::builtin(),
        ))))
    }

    async fn get_json(app: Router, uri: &str, auth: Option<&str>) -> (StatusCode, serde_json::Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(value) = auth {
            request = request.header(header::AUTHORIZATION, value);
        }
        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validate_known_agent() {
        let (status, body) = get_json(test_app(), "/validate", Some("Bearer Agent007")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "access_granted");
        assert_eq!(body["agent"], "Agent007");
        assert!(body["mission_briefing"]["mission_title"].is_string());
    }

    #[tokio::test]
    async fn test_validate_missing_header_is_401() {
        let (status, body) = get_json(test_app(), "/validate", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Unauthorized: Invalid token format");
    }

    #[tokio::test]
    async fn test_validate_unknown_agent_is_403_without_mission() {
        let (status, body) = get_json(test_app(), "/validate", Some("Bearer Eve")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["detail"], "Unauthorized: No missions assigned to this agent");
        assert!(body.get("mission_briefing").is_none());
    }

    #[tokio::test]
    async fn test_root_hello() {
        let (status, body) = get_json(test_app(), "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello from Mission Service!");
    }
}
