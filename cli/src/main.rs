// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! # OUTPOST CLI
//!
//! The `outpost` binary runs each piece of the demo:
//!
//! - `outpost validation` - credential validation service (missions)
//! - `outpost portal` - relay portal in front of the validation service
//! - `outpost provision` - one-shot gateway provisioning workflow
//!
//! Listener addresses, the portal's upstream, and the gateway endpoint are
//! flags with `OUTPOST_*` environment fallbacks. The gateway admin token is
//! environment-only.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use outpost_core::application::provisioner::ProvisioningOrchestrator;
use outpost_core::application::validation_service::ValidationService;
use outpost_core::config::{GatewayConfig, PortalConfig, ValidationConfig};
use outpost_core::domain::mission::MissionDirectory;
use outpost_core::infrastructure::gateway_client::GatewayClient;
use outpost_core::infrastructure::upstream::ValidationUpstream;
use outpost_core::presentation::{portal_api, validation_api};

mod server;

/// OUTPOST field-office demo
#[derive(Parser)]
#[command(name = "outpost")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "OUTPOST_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the credential validation service
    Validation {
        #[arg(long, env = "OUTPOST_VALIDATION_HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(long, env = "OUTPOST_VALIDATION_PORT", default_value = "5001")]
        port: u16,
    },

    /// Run the relay portal in front of the validation service
    Portal {
        #[arg(long, env = "OUTPOST_PORTAL_HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(long, env = "OUTPOST_PORTAL_PORT", default_value = "5002")]
        port: u16,

        /// Base URL of the validation service
        #[arg(
            long,
            env = "OUTPOST_UPSTREAM_URL",
            default_value = "http://mission-service:5001"
        )]
        upstream: String,

        /// Timeout for the outbound validation call, in seconds
        #[arg(long, env = "OUTPOST_UPSTREAM_TIMEOUT_SECS", default_value = "5")]
        upstream_timeout_secs: u64,
    },

    /// Provision the external gateway: services, routes, rate limits
    Provision {
        /// Gateway control-plane base URL
        #[arg(long, env = "OUTPOST_GATEWAY_URL")]
        gateway_url: String,

        /// Pause between provisioning steps, in seconds
        #[arg(long, env = "OUTPOST_STEP_DELAY_SECS", default_value = "2")]
        step_delay_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    match cli.command {
        Commands::Validation { host, port } => {
            run_validation(ValidationConfig { host, port }).await
        }
        Commands::Portal {
            host,
            port,
            upstream,
            upstream_timeout_secs,
        } => {
            run_portal(PortalConfig {
                host,
                port,
                upstream_url: upstream,
                upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            })
            .await
        }
        Commands::Provision {
            gateway_url,
            step_delay_secs,
        } => run_provision(gateway_url, step_delay_secs).await,
    }
}

async fn run_validation(config: ValidationConfig) -> Result<()> {
    let service = Arc::new(ValidationService::new(Arc::new(
        MissionDirectory::builtin(),
    )));
    let app = validation_api::app(service);

    info!("starting validation service");
    server::serve(app, &config.host, config.port).await
}

async fn run_portal(config: PortalConfig) -> Result<()> {
    let upstream =
        Arc::new(ValidationUpstream::new(&config).context("Failed to build upstream client")?);
    let app = portal_api::app(upstream);

    info!(upstream = %config.upstream_url, "starting portal service");
    server::serve(app, &config.host, config.port).await
}

async fn run_provision(gateway_url: String, step_delay_secs: u64) -> Result<()> {
    // Token is environment-only so it never lands in shell history or source.
    let admin_token = std::env::var("OUTPOST_GATEWAY_TOKEN")
        .context("OUTPOST_GATEWAY_TOKEN must be set for provisioning")?;

    let mut config = GatewayConfig::new(gateway_url, admin_token);
    config.step_delay = Duration::from_secs(step_delay_secs);

    let client =
        Arc::new(GatewayClient::new(&config).context("Failed to build gateway client")?);
    let orchestrator =
        ProvisioningOrchestrator::new(client, config.services.clone(), config.step_delay);

    let report = orchestrator.run().await;

    for service in &report.services {
        info!(
            service = %service.name,
            registered = ?service.registered,
            route = ?service.route_created,
            rate_limit = ?service.rate_limited,
            "provisioning outcome"
        );
    }

    if report.all_provisioned() {
        info!("Setup complete, all services provisioned");
    } else {
        // Best-effort run: report, do not fail the process.
        info!("Setup finished with failures, re-run provisioning after checking the gateway");
    }

    Ok(())
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}
