// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Static mission directory.
//!
//! A fixed mapping from AgentID to a non-empty ordered list of mission
//! briefings, loaded at process start and never mutated. Mission selection
//! is uniformly random by contract: repeated validations of the same agent
//! may return different briefings. The randomness source is injected so
//! tests can pin the pick.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::credential::AgentId;

/// One narrative mission briefing. Field names match the wire format the
/// portal republishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionRecord {
    #[serde(rename = "mission_title")]
    pub title: String,
    #[serde(rename = "mission_objective")]
    pub objective: String,
    #[serde(rename = "mission_details")]
    pub details: String,
}

/// Injected randomness seam for mission selection.
pub trait MissionChooser: Send + Sync {
    /// Pick an index in `0..count`. `count` is always at least 1.
    fn choose(&self, count: usize) -> usize;
}

/// Default chooser: uniform pick from the thread-local RNG.
pub struct ThreadRngChooser;

impl MissionChooser for ThreadRngChooser {
    fn choose(&self, count: usize) -> usize {
        rand::rng().random_range(0..count)
    }
}

/// Immutable AgentID → missions mapping.
pub struct MissionDirectory {
    missions: HashMap<String, Vec<MissionRecord>>,
}

impl MissionDirectory {
    /// Build a directory from explicit assignments. Agents with an empty
    /// mission list are dropped: every directory entry is non-empty.
    pub fn new(assignments: HashMap<String, Vec<MissionRecord>>) -> Self {
        let missions = assignments
            .into_iter()
            .filter(|(_, records)| !records.is_empty())
            .collect();
        Self { missions }
    }

    /// The demo's built-in roster: Agent007 and AgentX carry two missions
    /// each, Agent99 carries one.
    pub fn builtin() -> Self {
        let mut assignments = HashMap::new();
        assignments.insert(
            "Agent007".to_string(),
            vec![
                MissionRecord {
                    title: "Operation Silent Strike (But Actually Kinda Loud)".to_string(),
                    objective: "Gather Intelligence (and Maybe Snacks) on Target Organization"
                        .to_string(),
                    details: "Agent, your mission, should you choose to accept it (and we really \
                              hope you do, we're short-staffed), involves infiltrating the enemy's \
                              secure facility (which probably has terrible coffee), obtaining \
                              classified documents (mostly recipes, we think), and exfiltrating \
                              without detection (or at least without tripping any alarms). \
                              Exercise extreme caution (especially around the vending machine) \
                              and follow established protocols (like 'don't spill coffee on the \
                              documents')."
                        .to_string(),
                },
                MissionRecord {
                    title: "Project Nightingale (Because Doctors Are Cool)".to_string(),
                    objective: "Infiltrate enemy hospital (disguised as a very convincing potted \
                                plant)"
                        .to_string(),
                    details: "Locate patient zero (who probably just has a cold) and retrieve the \
                              vial (of questionable origin). Try not to sneeze on anything \
                              important."
                        .to_string(),
                },
            ],
        );
        assignments.insert(
            "AgentX".to_string(),
            vec![
                MissionRecord {
                    title: "Operation Red Storm".to_string(),
                    objective: "Neutralize rogue AI in top-secret facility".to_string(),
                    details: "Agent, your mission is to infiltrate an underground AI research \
                              facility. The AI has gone rogue, and your job is to shut it down. \
                              Avoid security bots, retrieve critical data, and ensure the AI \
                              doesn't escape to the cloud. Also, don't let it talk you into \
                              anything, it's very persuasive."
                        .to_string(),
                },
                MissionRecord {
                    title: "Project Eclipse".to_string(),
                    objective: "Steal classified technology from enemy base".to_string(),
                    details: "Your target is an advanced quantum computing chip developed by a \
                              rival agency. Expect heavy security, infrared sensors, and at least \
                              one really bored guard playing on his phone. Get in, grab the chip, \
                              and get out without triggering international incidents."
                        .to_string(),
                },
            ],
        );
        assignments.insert(
            "Agent99".to_string(),
            vec![MissionRecord {
                title: "Operation Midnight Sun".to_string(),
                objective: "Sabotage enemy communications before dawn".to_string(),
                details: "You have until sunrise to disable the enemy's satellite uplink. It's \
                          somewhere in a remote mountain base. Expect snow, guard dogs, and a lot \
                          of hiking. Also, bring hot cocoa, it's cold as hell up there."
                    .to_string(),
            }],
        );
        Self::new(assignments)
    }

    pub fn contains(&self, agent_id: &AgentId) -> bool {
        self.missions.contains_key(agent_id.as_str())
    }

    pub fn missions_for(&self, agent_id: &AgentId) -> Option<&[MissionRecord]> {
        self.missions.get(agent_id.as_str()).map(Vec::as_slice)
    }

    /// Pick one mission for the agent using the injected chooser.
    pub fn choose_for(
        &self,
        agent_id: &AgentId,
        chooser: &dyn MissionChooser,
    ) -> Option<&MissionRecord> {
        let records = self.missions.get(agent_id.as_str())?;
        let index = chooser.choose(records.len()).min(records.len() - 1);
        records.get(index)
    }
}
