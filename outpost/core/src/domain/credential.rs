// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Bearer credential parsing.
//!
//! Credentials are opaque strings of the form `Bearer <AgentID>`. Nothing
//! beyond the scheme prefix is verified; the AgentID is used verbatim as a
//! lookup key into the mission directory.

use thiserror::Error;

/// Scheme prefix every credential must carry, trailing space included.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Opaque identity extracted from a bearer credential.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors while parsing a credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Unauthorized: Invalid token format")]
    MalformedCredential,
}

impl AgentId {
    /// Extract the AgentID from an `Authorization` header value.
    ///
    /// An absent header and a header without the `Bearer ` prefix are the
    /// same failure: a malformed credential, distinct from an unknown agent.
    pub fn from_authorization(authorization: Option<&str>) -> Result<Self, CredentialError> {
        let header = authorization.ok_or(CredentialError::MalformedCredential)?;
        let agent_id = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(CredentialError::MalformedCredential)?;
        Ok(AgentId(agent_id.to_string()))
    }
}
