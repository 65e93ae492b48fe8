//! Squads: lightweight local-only social simulation
//!
//! Peers are synthesized locally with randomized stats; there is no server
//! authority and no network synchronization.

use serde::{Deserialize, Serialize};

use crate::core::types::{SquadId, UserId};

/// Members per squad, current user included
pub const ROSTER_SIZE: usize = 4;

/// Agent names used when synthesizing squad peers
pub const PEER_NAMES: &[&str] = &[
    "Vesper", "Citrine", "Halcyon", "Onyx", "Meridian", "Sable", "Quill", "Ember",
];

/// Static catalog of squad quests: (title, description, weekly XP goal)
pub const QUEST_CATALOG: &[(&str, &str, u64)] = &[
    (
        "Steady Hands",
        "Earn 500 XP as a squad this week",
        500,
    ),
    (
        "Deep Focus",
        "Earn 1000 XP as a squad this week",
        1000,
    ),
    (
        "Momentum",
        "Earn 2000 XP as a squad this week",
        2000,
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadMember {
    pub user_id: UserId,
    pub agent_name: String,
    pub level: u32,
    pub weekly_xp: u64,
    pub is_current_user: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadQuest {
    pub title: String,
    pub description: String,
    pub target_xp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub id: SquadId,
    pub name: String,
    pub members: Vec<SquadMember>,
    pub quest: SquadQuest,
}
