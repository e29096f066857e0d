// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Gateway admin API client.
//!
//! Thin reqwest wrapper over the external control plane's admin endpoints:
//! service registration, route creation, rate-limit plugins, and a smoke
//! test GET. The control plane is a black box; this client never inspects
//! response bodies on the mutating calls.
//!
//! Success policy: HTTP 200 and 201 both count as success. The admin API
//! reports already-exists with 200, so re-running provisioning against a
//! configured gateway stays green. Any other status is `Ok(false)`, not an
//! error; only transport failures surface as `Err`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::config::{GatewayConfig, ServiceDescriptor};

/// Transport-level failures talking to the control plane.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway admin API unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result of a plain GET against a provisioned route. Observational only:
/// the orchestrator logs it and moves on.
#[derive(Debug, Clone)]
pub struct SmokeTestReport {
    pub route_path: String,
    pub status: u16,
    pub body: String,
}

/// Seam between the orchestrator and the control plane, so provisioning
/// order and continue-on-error behavior can be tested without a gateway.
#[async_trait]
pub trait GatewayAdmin: Send + Sync {
    async fn register_service(&self, service: &ServiceDescriptor) -> Result<bool, GatewayError>;
    async fn create_route(&self, service: &ServiceDescriptor) -> Result<bool, GatewayError>;
    async fn attach_rate_limit(&self, service: &ServiceDescriptor) -> Result<bool, GatewayError>;
    async fn smoke_test(&self, route_path: &str) -> Result<SmokeTestReport, GatewayError>;
}

pub struct GatewayClient {
    admin_url: String,
    admin_token: String,
    client: Client,
}

impl GatewayClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            admin_url: config.admin_url.trim_end_matches('/').to_string(),
            admin_token: config.admin_token.clone(),
            client,
        })
    }

    /// POST a JSON body to an admin path and apply the 200-or-201 policy.
    async fn post_admin(&self, path: &str, body: serde_json::Value) -> Result<bool, GatewayError> {
        let url = format!("{}{}", self.admin_url, path);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.admin_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "gateway admin call");
        Ok(status.as_u16() == 200 || status.as_u16() == 201)
    }
}

#[async_trait]
impl GatewayAdmin for GatewayClient {
    async fn register_service(&self, service: &ServiceDescriptor) -> Result<bool, GatewayError> {
        self.post_admin(
            "/services/",
            json!({ "name": service.name, "url": service.upstream_url }),
        )
        .await
    }

    /// Assumes `register_service` already ran for this descriptor; the
    /// control plane rejects routes for unknown services and that rejection
    /// shows up here as `Ok(false)`.
    async fn create_route(&self, service: &ServiceDescriptor) -> Result<bool, GatewayError> {
        self.post_admin(
            &format!("/services/{}/routes", service.name),
            json!({ "paths": [service.route_path] }),
        )
        .await
    }

    async fn attach_rate_limit(&self, service: &ServiceDescriptor) -> Result<bool, GatewayError> {
        self.post_admin(
            &format!("/services/{}/plugins", service.name),
            json!({
                "name": "rate-limiting",
                "config": { "minute": service.rate_limit_per_minute },
            }),
        )
        .await
    }

    async fn smoke_test(&self, route_path: &str) -> Result<SmokeTestReport, GatewayError> {
        let url = format!("{}{}", self.admin_url, route_path);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(SmokeTestReport {
            route_path: route_path.to_string(),
            status,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(admin_url: &str) -> GatewayConfig {
        GatewayConfig {
            admin_url: admin_url.to_string(),
            admin_token: "test-admin-token".to_string(),
            step_delay: Duration::ZERO,
            request_timeout: Duration::from_secs(2),
            services: GatewayConfig::default_services(),
        }
    }

    fn descriptor() -> ServiceDescriptor {
        ServiceDescriptor {
            name: "auth-service".to_string(),
            upstream_url: "http://auth-service:5001".to_string(),
            route_path: "/auth".to_string(),
            rate_limit_per_minute: 20,
        }
    }

    #[tokio::test]
    async fn test_register_service_accepts_201() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/services/")
            .match_header("authorization", "Bearer test-admin-token")
            .match_body(mockito::Matcher::Json(json!({
                "name": "auth-service",
                "url": "http://auth-service:5001",
            })))
            .with_status(201)
            .with_body(r#"{"id":"svc-1"}"#)
            .create_async()
            .await;

        let client = GatewayClient::new(&config(&server.url())).unwrap();
        assert!(client.register_service(&descriptor()).await.unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_register_service_accepts_200_as_already_exists() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/services/")
            .with_status(200)
            .create_async()
            .await;

        let client = GatewayClient::new(&config(&server.url())).unwrap();
        assert!(client.register_service(&descriptor()).await.unwrap());
    }

    #[tokio::test]
    async fn test_register_service_other_status_is_false_not_err() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/services/")
            .with_status(409)
            .create_async()
            .await;

        let client = GatewayClient::new(&config(&server.url())).unwrap();
        assert!(!client.register_service(&descriptor()).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_route_posts_paths_under_service() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/services/auth-service/routes")
            .match_body(mockito::Matcher::Json(json!({ "paths": ["/auth"] })))
            .with_status(201)
            .create_async()
            .await;

        let client = GatewayClient::new(&config(&server.url())).unwrap();
        assert!(client.create_route(&descriptor()).await.unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_attach_rate_limit_sends_plugin_config() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/services/auth-service/plugins")
            .match_body(mockito::Matcher::Json(json!({
                "name": "rate-limiting",
                "config": { "minute": 20 },
            })))
            .with_status(201)
            .create_async()
            .await;

        let client = GatewayClient::new(&config(&server.url())).unwrap();
        assert!(client.attach_rate_limit(&descriptor()).await.unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_smoke_test_reports_without_interpretation() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth")
            .with_status(503)
            .with_body("upstream down")
            .create_async()
            .await;

        let client = GatewayClient::new(&config(&server.url())).unwrap();
        let report = client.smoke_test("/auth").await.unwrap();
        assert_eq!(report.status, 503);
        assert_eq!(report.body, "upstream down");
        assert_eq!(report.route_path, "/auth");
    }

    #[tokio::test]
    async fn test_unreachable_gateway_is_transport_error() {
        // Port from a dropped listener: connection refused. (A dropped
        // mockito server goes back to its pool and keeps listening, so a
        // plain TcpListener is used to obtain a dead port.)
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = GatewayClient::new(&config(&url)).unwrap();
        let err = client.register_service(&descriptor()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
