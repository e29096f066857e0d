// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! # OUTPOST Core
//!
//! Domain types, application services, and infrastructure clients for the
//! OUTPOST field-office demo: a mission-briefing portal that relays bearer
//! credentials to a validation service, plus a provisioning workflow that
//! configures an external API gateway for both services.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Modules:** `domain` (credentials, missions, validation results),
//!   `application` (validation service, provisioning orchestrator),
//!   `infrastructure` (gateway admin client, validation upstream client),
//!   `presentation` (axum routers for the two runtime services)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
