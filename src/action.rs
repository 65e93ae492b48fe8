//! Action definitions and domain categorization
//!
//! Actions are the only mutation vector into [`AppState`](crate::model::AppState).
//! Payloads carry the timestamps and pre-rolled loot they need, so reducers
//! stay clock-free and referentially transparent; the impure shell (command
//! handlers, collaborators) decides "now" and random outcomes before
//! dispatching.

use chrono::{DateTime, NaiveDate, Utc, Weekday};

use crate::core::types::{ApiKeyId, QuestId, RewardId, TaskId};
use crate::model::{AppState, CacheType, DailyQuest, Priority};

/// Sub-domain owning an action kind. The engine routes each domain to
/// exactly one registered reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionDomain {
    Tasks,
    Inventory,
    Journal,
    Rewards,
    Skills,
    Squads,
    Settings,
    Misc,
    /// `ReplaceState` only; handled by the engine itself, never routed
    Engine,
}

/// What an opened cache yields
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLoot {
    /// Flat XP, recorded as a completed pseudo-task
    Xp { amount: u32, at: DateTime<Utc> },
    /// A timed task-XP multiplier
    Boost {
        multiplier: f64,
        expires_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Tasks
    AddTask {
        text: String,
        xp: u32,
        due_date: Option<NaiveDate>,
        priority: Priority,
        at: DateTime<Utc>,
    },
    CompleteTask {
        id: TaskId,
        at: DateTime<Utc>,
    },
    DeleteTask {
        id: TaskId,
    },

    // Inventory
    AwardCache {
        cache_type: CacheType,
    },
    OpenCache {
        cache_type: CacheType,
        loot: CacheLoot,
    },
    DismissNewCacheNotifier,

    // Journal
    AddJournalEntry {
        text: String,
        at: DateTime<Utc>,
    },

    // Rewards
    AddReward {
        name: String,
        cost: i32,
        is_one_time: bool,
        at: DateTime<Utc>,
    },
    DeleteReward {
        id: RewardId,
    },
    RedeemReward {
        reward_id: RewardId,
        at: DateTime<Utc>,
    },

    // Skills
    AddSkill {
        name: String,
    },
    AddSkillXp {
        name: String,
        amount: u32,
    },

    // Squads
    CreateSquad {
        name: String,
        at: DateTime<Utc>,
    },
    LeaveSquad,

    // Settings
    SetTheme {
        theme: String,
    },
    SetLanguage {
        language: String,
    },
    SetSoundEnabled {
        enabled: bool,
    },
    SetAgentName {
        name: String,
    },
    CompleteOnboarding,
    SetWeekStart {
        weekday: Weekday,
    },
    SetLocalAiEndpoint {
        endpoint: Option<String>,
    },
    AddApiKey {
        label: String,
        key: String,
    },
    RemoveApiKey {
        id: ApiKeyId,
    },
    ToggleApiKey {
        id: ApiKeyId,
    },
    MarkApiKeyUsed {
        index: usize,
    },

    // Misc
    SetDailyQuests {
        quests: Vec<DailyQuest>,
    },
    ClaimDailyQuest {
        id: QuestId,
        at: DateTime<Utc>,
    },
    RecordPomodoroSession {
        day: NaiveDate,
    },
    SetLastWeeklyReview {
        at: DateTime<Utc>,
    },
    SetLastBriefing {
        at: DateTime<Utc>,
    },

    /// Wholesale state substitution, bypassing all reducers. The caller must
    /// validate the payload first; the engine performs no re-validation.
    ReplaceState(Box<AppState>),
}

impl Action {
    pub fn domain(&self) -> ActionDomain {
        match self {
            Action::AddTask { .. } | Action::CompleteTask { .. } | Action::DeleteTask { .. } => {
                ActionDomain::Tasks
            }
            Action::AwardCache { .. }
            | Action::OpenCache { .. }
            | Action::DismissNewCacheNotifier => ActionDomain::Inventory,
            Action::AddJournalEntry { .. } => ActionDomain::Journal,
            Action::AddReward { .. } | Action::DeleteReward { .. } | Action::RedeemReward { .. } => {
                ActionDomain::Rewards
            }
            Action::AddSkill { .. } | Action::AddSkillXp { .. } => ActionDomain::Skills,
            Action::CreateSquad { .. } | Action::LeaveSquad => ActionDomain::Squads,
            Action::SetTheme { .. }
            | Action::SetLanguage { .. }
            | Action::SetSoundEnabled { .. }
            | Action::SetAgentName { .. }
            | Action::CompleteOnboarding
            | Action::SetWeekStart { .. }
            | Action::SetLocalAiEndpoint { .. }
            | Action::AddApiKey { .. }
            | Action::RemoveApiKey { .. }
            | Action::ToggleApiKey { .. }
            | Action::MarkApiKeyUsed { .. } => ActionDomain::Settings,
            Action::SetDailyQuests { .. }
            | Action::ClaimDailyQuest { .. }
            | Action::RecordPomodoroSession { .. }
            | Action::SetLastWeeklyReview { .. }
            | Action::SetLastBriefing { .. } => ActionDomain::Misc,
            Action::ReplaceState(_) => ActionDomain::Engine,
        }
    }

    /// Stable name for dispatch traces
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddTask { .. } => "AddTask",
            Action::CompleteTask { .. } => "CompleteTask",
            Action::DeleteTask { .. } => "DeleteTask",
            Action::AwardCache { .. } => "AwardCache",
            Action::OpenCache { .. } => "OpenCache",
            Action::DismissNewCacheNotifier => "DismissNewCacheNotifier",
            Action::AddJournalEntry { .. } => "AddJournalEntry",
            Action::AddReward { .. } => "AddReward",
            Action::DeleteReward { .. } => "DeleteReward",
            Action::RedeemReward { .. } => "RedeemReward",
            Action::AddSkill { .. } => "AddSkill",
            Action::AddSkillXp { .. } => "AddSkillXp",
            Action::CreateSquad { .. } => "CreateSquad",
            Action::LeaveSquad => "LeaveSquad",
            Action::SetTheme { .. } => "SetTheme",
            Action::SetLanguage { .. } => "SetLanguage",
            Action::SetSoundEnabled { .. } => "SetSoundEnabled",
            Action::SetAgentName { .. } => "SetAgentName",
            Action::CompleteOnboarding => "CompleteOnboarding",
            Action::SetWeekStart { .. } => "SetWeekStart",
            Action::SetLocalAiEndpoint { .. } => "SetLocalAiEndpoint",
            Action::AddApiKey { .. } => "AddApiKey",
            Action::RemoveApiKey { .. } => "RemoveApiKey",
            Action::ToggleApiKey { .. } => "ToggleApiKey",
            Action::MarkApiKeyUsed { .. } => "MarkApiKeyUsed",
            Action::SetDailyQuests { .. } => "SetDailyQuests",
            Action::ClaimDailyQuest { .. } => "ClaimDailyQuest",
            Action::RecordPomodoroSession { .. } => "RecordPomodoroSession",
            Action::SetLastWeeklyReview { .. } => "SetLastWeeklyReview",
            Action::SetLastBriefing { .. } => "SetLastBriefing",
            Action::ReplaceState(_) => "ReplaceState",
        }
    }
}
