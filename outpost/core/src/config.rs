// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Startup configuration for the runtime services and the provisioning
//! workflow.
//!
//! All of these are constructed once at process start (from CLI flags and
//! environment) and handed to service constructors. The gateway admin token
//! deliberately has no default: it must come from the environment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One backend service to register with the external gateway. Sent to the
/// control plane and not retained afterward; the gateway becomes the source
/// of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub upstream_url: String,
    pub route_path: String,
    pub rate_limit_per_minute: u32,
}

/// Validation service listener settings.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
        }
    }
}

/// Portal (relay) service settings.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the validation service the portal forwards to.
    pub upstream_url: String,
    /// Bound on the single outbound call per inbound request.
    pub upstream_timeout: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5002,
            upstream_url: "http://mission-service:5001".to_string(),
            upstream_timeout: Duration::from_secs(5),
        }
    }
}

/// Gateway control-plane settings for the provisioning workflow.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Control-plane base URL, e.g. a Konnect control plane endpoint.
    pub admin_url: String,
    /// Admin bearer token. Resolved from the environment at startup; never
    /// a literal in source.
    pub admin_token: String,
    /// Pause between provisioning steps. A primitive backpressure stand-in
    /// for rate-limit-aware retry logic on the admin API.
    pub step_delay: Duration,
    pub request_timeout: Duration,
    pub services: Vec<ServiceDescriptor>,
}

impl GatewayConfig {
    pub const DEFAULT_STEP_DELAY: Duration = Duration::from_secs(2);

    pub fn new(admin_url: String, admin_token: String) -> Self {
        Self {
            admin_url,
            admin_token,
            step_delay: Self::DEFAULT_STEP_DELAY,
            request_timeout: Duration::from_secs(10),
            services: Self::default_services(),
        }
    }

    /// The demo's fixed service list.
    pub fn default_services() -> Vec<ServiceDescriptor> {
        vec![
            ServiceDescriptor {
                name: "auth-service".to_string(),
                upstream_url: "http://auth-service:5001".to_string(),
                route_path: "/auth".to_string(),
                rate_limit_per_minute: 20,
            },
            ServiceDescriptor {
                name: "agent-portal".to_string(),
                upstream_url: "http://agent-portal:5002".to_string(),
                route_path: "/agent-portal".to_string(),
                rate_limit_per_minute: 50,
            },
        ]
    }
}
