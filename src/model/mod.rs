//! Application state tree
//!
//! `AppState` is the single source of truth. It is an immutable value:
//! reducers never mutate it in place, they return a replacement, and the
//! store swaps the whole tree atomically per action.

pub mod inventory;
pub mod journal;
pub mod reward;
pub mod skill;
pub mod squad;
pub mod task;

use ahash::AHashMap;
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::types::ApiKeyId;

pub use inventory::{Boost, CacheType, Inventory};
pub use journal::{DailyQuest, DailyQuestKind, JournalEntry};
pub use reward::{RedeemedReward, Reward};
pub use skill::Skill;
pub use squad::{Squad, SquadMember, SquadQuest, PEER_NAMES, QUEST_CATALOG, ROSTER_SIZE};
pub use task::{Priority, Task, TaskKind};

/// A stored AI credential. The core rotates and gates on these but performs
/// no network I/O itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: ApiKeyId,
    pub label: String,
    pub key: String,
    pub enabled: bool,
}

impl ApiKey {
    pub fn new(label: String, key: String) -> Self {
        Self {
            id: ApiKeyId::new(),
            label,
            key,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub tasks: Vec<Task>,
    /// Kept sorted ascending by cost at all times
    pub rewards: Vec<Reward>,
    /// Append-only; removed only by full-state replacement
    pub redeemed_rewards: Vec<RedeemedReward>,
    pub inventory: Inventory,
    pub skills: Vec<Skill>,
    /// At most one squad per user
    pub squad: Option<Squad>,
    /// Newest first
    pub journal_entries: Vec<JournalEntry>,
    pub daily_quests: Vec<DailyQuest>,
    pub api_keys: Vec<ApiKey>,
    /// Reset to 0 whenever the key set structurally changes
    pub last_used_api_key_index: usize,
    pub local_ai_endpoint: Option<String>,
    pub theme: String,
    pub language: String,
    pub sound_enabled: bool,
    pub agent_name: String,
    pub onboarding_complete: bool,
    pub last_weekly_review: Option<DateTime<Utc>>,
    pub last_briefing: Option<DateTime<Utc>>,
    /// Completed pomodoro sessions keyed by calendar day
    pub pomodoro_sessions: AHashMap<NaiveDate, u32>,
    /// Locale start-of-week convention for the weekly XP window
    pub week_starts_on: Weekday,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            rewards: Vec::new(),
            redeemed_rewards: Vec::new(),
            inventory: Inventory::default(),
            skills: Vec::new(),
            squad: None,
            journal_entries: Vec::new(),
            daily_quests: Vec::new(),
            api_keys: Vec::new(),
            last_used_api_key_index: 0,
            local_ai_endpoint: None,
            theme: "dark".to_string(),
            language: "en".to_string(),
            sound_enabled: true,
            agent_name: "Agent".to_string(),
            onboarding_complete: false,
            last_weekly_review: None,
            last_briefing: None,
            pomodoro_sessions: AHashMap::new(),
            week_starts_on: Weekday::Mon,
        }
    }
}

impl AppState {
    pub fn task(&self, id: crate::core::types::TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn reward(&self, id: crate::core::types::RewardId) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == id)
    }

    /// Case-insensitive skill lookup
    pub fn skill_index(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.skills
            .iter()
            .position(|s| s.name.to_lowercase() == needle)
    }
}
