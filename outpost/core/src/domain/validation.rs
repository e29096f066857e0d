// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Validation results and the rejection taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::credential::CredentialError;
use super::mission::MissionRecord;

/// Outcome flag carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStatus {
    AccessGranted,
    Rejected,
}

/// Per-request validation outcome. Constructed fresh for every request and
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub status: AccessStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_briefing: Option<MissionRecord>,
}

impl ValidationResult {
    /// Grant for a known agent. The invariant that the agent exists in the
    /// mission directory is enforced upstream: unknown agents are rejected
    /// before any mission lookup happens.
    pub fn granted(agent_id: &str, mission: MissionRecord) -> Self {
        Self {
            status: AccessStatus::AccessGranted,
            agent: Some(agent_id.to_string()),
            message: format!(
                "Agent {agent_id} validated. Your mission briefing is now available."
            ),
            mission_briefing: Some(mission),
        }
    }
}

/// Rejections from the validation service. A malformed credential is a
/// client error (401); a well-formed credential naming an unknown agent is
/// an authorization error (403). The two are never conflated.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unauthorized: Invalid token format")]
    MalformedCredential,

    #[error("Unauthorized: No missions assigned to this agent")]
    UnknownAgent,
}

impl From<CredentialError> for ValidationError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::MalformedCredential => ValidationError::MalformedCredential,
        }
    }
}
