// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Gateway provisioning orchestrator.
//!
//! Strictly sequential: for each configured service, register it, create its
//! route, attach its rate-limit plugin, with a fixed pause between steps.
//! After the whole list is processed, each route gets one smoke-test GET.
//!
//! Best-effort throughout. A failed step (admin API said no, or transport
//! error) is logged and recorded, and the loop moves on; one service's
//! failure never blocks another's provisioning. The three calls are not
//! transactional: a registered service whose route creation failed stays
//! half-configured in the gateway. The report makes that visible so an
//! operator can re-run provisioning, which is safe under the client's
//! idempotent success policy.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::ServiceDescriptor;
use crate::infrastructure::gateway_client::{GatewayAdmin, GatewayError, SmokeTestReport};

/// Per-service step outcomes. `None` means the step's admin call failed at
/// the transport level.
#[derive(Debug, Clone, Default)]
pub struct ServiceProvisionOutcome {
    pub name: String,
    pub registered: Option<bool>,
    pub route_created: Option<bool>,
    pub rate_limited: Option<bool>,
    pub smoke_test: Option<SmokeTestReport>,
}

impl ServiceProvisionOutcome {
    pub fn fully_provisioned(&self) -> bool {
        self.registered == Some(true)
            && self.route_created == Some(true)
            && self.rate_limited == Some(true)
    }
}

/// Outcome of one provisioning run across the whole service list.
#[derive(Debug, Clone, Default)]
pub struct ProvisioningReport {
    pub services: Vec<ServiceProvisionOutcome>,
}

impl ProvisioningReport {
    pub fn all_provisioned(&self) -> bool {
        self.services.iter().all(|s| s.fully_provisioned())
    }
}

pub struct ProvisioningOrchestrator {
    gateway: Arc<dyn GatewayAdmin>,
    services: Vec<ServiceDescriptor>,
    step_delay: Duration,
}

impl ProvisioningOrchestrator {
    pub fn new(
        gateway: Arc<dyn GatewayAdmin>,
        services: Vec<ServiceDescriptor>,
        step_delay: Duration,
    ) -> Self {
        Self {
            gateway,
            services,
            step_delay,
        }
    }

    /// Run the full provisioning sequence and smoke tests.
    pub async fn run(&self) -> ProvisioningReport {
        let mut report = ProvisioningReport::default();

        for service in &self.services {
            let mut outcome = ServiceProvisionOutcome {
                name: service.name.clone(),
                ..Default::default()
            };

            outcome.registered =
                self.record_step("register_service", &service.name, self.gateway.register_service(service).await);
            self.pause().await;

            outcome.route_created =
                self.record_step("create_route", &service.name, self.gateway.create_route(service).await);
            self.pause().await;

            outcome.rate_limited =
                self.record_step("attach_rate_limit", &service.name, self.gateway.attach_rate_limit(service).await);
            self.pause().await;

            report.services.push(outcome);
        }

        info!("provisioning pass complete, smoke-testing routes");

        for (service, outcome) in self.services.iter().zip(report.services.iter_mut()) {
            match self.gateway.smoke_test(&service.route_path).await {
                Ok(result) => {
                    info!(
                        service = %service.name,
                        route = %result.route_path,
                        status = result.status,
                        "smoke test"
                    );
                    outcome.smoke_test = Some(result);
                }
                Err(err) => {
                    warn!(service = %service.name, error = %err, "smoke test unreachable");
                }
            }
        }

        report
    }

    /// Log a step's boolean result; flatten transport errors to `None`.
    fn record_step(&self, step: &str, service: &str, result: Result<bool, GatewayError>) -> Option<bool> {
        match result {
            Ok(ok) => {
                info!(%step, %service, success = ok, "provisioning step");
                Some(ok)
            }
            Err(err) => {
                warn!(%step, %service, error = %err, "provisioning step failed");
                None
            }
        }
    }

    async fn pause(&self) {
        if !self.step_delay.is_zero() {
            tokio::time::sleep(self.step_delay).await;
        }
    }
}
