//! Task records: the unit of the XP economy
//!
//! Every XP source in the system flows through a completed task, including
//! cache loot and daily-quest claims, so the progression calculator only ever
//! has one history to sum.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Where a task came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// A task the user created
    Standard,
    /// Pseudo-task synthesized when a cache yields XP loot
    CacheLoot,
    /// Pseudo-task synthesized when a daily quest is claimed
    QuestClaim,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    /// XP granted on completion; after completion this holds the granted
    /// (boost-scaled) amount.
    pub xp: u32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub kind: TaskKind,
}

impl Task {
    pub fn new(
        text: String,
        xp: u32,
        due_date: Option<NaiveDate>,
        priority: Priority,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TaskId::new(),
            text,
            xp,
            completed: false,
            completed_at: None,
            created_at: at,
            due_date,
            priority,
            kind: TaskKind::Standard,
        }
    }

    /// Completed pseudo-task carrying XP loot from an opened cache.
    pub fn cache_loot(amount: u32, at: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::new(),
            text: "Cache loot".to_string(),
            xp: amount,
            completed: true,
            completed_at: Some(at),
            created_at: at,
            due_date: None,
            priority: Priority::Medium,
            kind: TaskKind::CacheLoot,
        }
    }

    /// Completed pseudo-task granting XP for a claimed daily quest.
    pub fn quest_claim(title: &str, amount: u32, at: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::new(),
            text: format!("Daily quest: {title}"),
            xp: amount,
            completed: true,
            completed_at: Some(at),
            created_at: at,
            due_date: None,
            priority: Priority::Medium,
            kind: TaskKind::QuestClaim,
        }
    }
}
