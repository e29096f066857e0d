// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Integration tests for the provisioning orchestrator.
//!
//! A recording mock stands in for the gateway control plane so the tests
//! can verify call ordering, the continue-on-error policy, and that smoke
//! tests run after the whole provisioning pass.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use outpost_core::application::provisioner::ProvisioningOrchestrator;
use outpost_core::config::{GatewayConfig, ServiceDescriptor};
use outpost_core::infrastructure::gateway_client::{
    GatewayAdmin, GatewayError, SmokeTestReport,
};

/// Control-plane stand-in that records every call and can be told to fail
/// specific steps for specific services.
#[derive(Default)]
struct RecordingGateway {
    calls: Mutex<Vec<String>>,
    route_failures: Vec<String>,
    register_transport_failures: Vec<String>,
}

impl RecordingGateway {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

/// Manufacture a real connect error from a dropped ephemeral listener.
async fn transport_error() -> GatewayError {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let err = reqwest::Client::new().get(url).send().await.unwrap_err();
    GatewayError::Transport(err)
}

#[async_trait]
impl GatewayAdmin for RecordingGateway {
    async fn register_service(&self, service: &ServiceDescriptor) -> Result<bool, GatewayError> {
        self.record(format!("register:{}", service.name));
        if self.register_transport_failures.contains(&service.name) {
            return Err(transport_error().await);
        }
        Ok(true)
    }

    async fn create_route(&self, service: &ServiceDescriptor) -> Result<bool, GatewayError> {
        self.record(format!("route:{}", service.name));
        Ok(!self.route_failures.contains(&service.name))
    }

    async fn attach_rate_limit(&self, service: &ServiceDescriptor) -> Result<bool, GatewayError> {
        self.record(format!("rate_limit:{}", service.name));
        Ok(true)
    }

    async fn smoke_test(&self, route_path: &str) -> Result<SmokeTestReport, GatewayError> {
        self.record(format!("smoke:{route_path}"));
        Ok(SmokeTestReport {
            route_path: route_path.to_string(),
            status: 200,
            body: "ok".to_string(),
        })
    }
}

fn orchestrator(gateway: Arc<RecordingGateway>) -> ProvisioningOrchestrator {
    ProvisioningOrchestrator::new(gateway, GatewayConfig::default_services(), Duration::ZERO)
}

#[tokio::test]
async fn test_steps_run_in_order_per_service() {
    let gateway = Arc::new(RecordingGateway::default());
    let report = orchestrator(gateway.clone()).run().await;

    assert_eq!(
        gateway.calls(),
        vec![
            "register:auth-service",
            "route:auth-service",
            "rate_limit:auth-service",
            "register:agent-portal",
            "route:agent-portal",
            "rate_limit:agent-portal",
            "smoke:/auth",
            "smoke:/agent-portal",
        ]
    );
    assert!(report.all_provisioned());
}

#[tokio::test]
async fn test_failed_route_does_not_block_next_service() {
    let gateway = Arc::new(RecordingGateway {
        route_failures: vec!["auth-service".to_string()],
        ..Default::default()
    });
    let report = orchestrator(gateway.clone()).run().await;

    // auth-service's route failed, but agent-portal was still fully
    // provisioned, and auth-service's own later steps still ran.
    let calls = gateway.calls();
    assert!(calls.contains(&"rate_limit:auth-service".to_string()));
    assert!(calls.contains(&"register:agent-portal".to_string()));

    assert_eq!(report.services[0].route_created, Some(false));
    assert!(!report.services[0].fully_provisioned());
    assert!(report.services[1].fully_provisioned());
    assert!(!report.all_provisioned());
}

#[tokio::test]
async fn test_transport_error_recorded_as_none_and_loop_continues() {
    let gateway = Arc::new(RecordingGateway {
        register_transport_failures: vec!["auth-service".to_string()],
        ..Default::default()
    });
    let report = orchestrator(gateway.clone()).run().await;

    assert_eq!(report.services[0].registered, None);
    assert!(report.services[1].fully_provisioned());
    // Smoke tests still ran for both routes.
    let calls = gateway.calls();
    assert!(calls.contains(&"smoke:/auth".to_string()));
    assert!(calls.contains(&"smoke:/agent-portal".to_string()));
}

#[tokio::test]
async fn test_smoke_tests_run_after_all_provisioning() {
    let gateway = Arc::new(RecordingGateway::default());
    orchestrator(gateway.clone()).run().await;

    let calls = gateway.calls();
    let first_smoke = calls.iter().position(|c| c.starts_with("smoke:")).unwrap();
    let last_provision = calls
        .iter()
        .rposition(|c| !c.starts_with("smoke:"))
        .unwrap();
    assert!(last_provision < first_smoke);
}

#[tokio::test]
async fn test_report_carries_smoke_results() {
    let gateway = Arc::new(RecordingGateway::default());
    let report = orchestrator(gateway).run().await;

    let smoke = report.services[0].smoke_test.as_ref().unwrap();
    assert_eq!(smoke.route_path, "/auth");
    assert_eq!(smoke.status, 200);
}
