// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Application services: credential validation and gateway provisioning.

pub mod provisioner;
pub mod validation_service;

pub use provisioner::{ProvisioningOrchestrator, ProvisioningReport, ServiceProvisionOutcome};
pub use validation_service::ValidationService;
