// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Domain types for the token-gated relay: bearer credentials, the static
//! mission directory, and per-request validation results.

pub mod credential;
pub mod mission;
pub mod validation;

pub use credential::{AgentId, CredentialError, BEARER_PREFIX};
pub use mission::{MissionChooser, MissionDirectory, MissionRecord, ThreadRngChooser};
pub use validation::{AccessStatus, ValidationError, ValidationResult};
