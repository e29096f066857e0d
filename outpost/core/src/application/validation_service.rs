// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Credential validation.
//!
//! Stateless per-call: parse the bearer credential, look the agent up in the
//! static directory, and pick one briefing at random. Unknown agents are
//! rejected before any mission lookup, so a granted result always names a
//! directory entry.

use std::sync::Arc;

use tracing::debug;

use crate::domain::credential::AgentId;
use crate::domain::mission::{MissionChooser, MissionDirectory, ThreadRngChooser};
use crate::domain::validation::{ValidationError, ValidationResult};

pub struct ValidationService {
    directory: Arc<MissionDirectory>,
    chooser: Arc<dyn MissionChooser>,
}

impl ValidationService {
    /// Service over the built-in roster with uniform random selection.
    pub fn new(directory: Arc<MissionDirectory>) -> Self {
        Self::with_chooser(directory, Arc::new(ThreadRngChooser))
    }

    /// Service with an explicit chooser, for deterministic tests.
    pub fn with_chooser(directory: Arc<MissionDirectory>, chooser: Arc<dyn MissionChooser>) -> Self {
        Self { directory, chooser }
    }

    /// Validate an `Authorization` header value.
    ///
    /// Fails closed: an absent or malformed credential is rejected as
    /// `MalformedCredential`, a well-formed credential for an agent without
    /// missions as `UnknownAgent`.
    pub fn validate(&self, authorization: Option<&str>) -> Result<ValidationResult, ValidationError> {
        let agent_id = AgentId::from_authorization(authorization)?;

        if !self.directory.contains(&agent_id) {
            debug!(agent = %agent_id, "rejecting unknown agent");
            return Err(ValidationError::UnknownAgent);
        }

        let mission = self
            .directory
            .choose_for(&agent_id, self.chooser.as_ref())
            .ok_or(ValidationError::UnknownAgent)?;

        debug!(agent = %agent_id, mission = %mission.title, "access granted");
        Ok(ValidationResult::granted(agent_id.as_str(), mission.clone()))
    }
}
