//! Journal entries and daily quests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{JournalEntryId, QuestId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: JournalEntryId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(text: String, at: DateTime<Utc>) -> Self {
        Self {
            id: JournalEntryId::new(),
            text,
            created_at: at,
        }
    }
}

/// What a daily quest asks the user to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DailyQuestKind {
    /// Write journal entries
    WriteJournal,
    /// Complete ordinary tasks
    CompleteTasks,
    /// Finish pomodoro focus sessions
    FocusSession,
}

/// A rotating daily objective. Progress advances synchronously inside the
/// reducers that handle the matching activity; claiming grants `xp` through
/// a completed pseudo-task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyQuest {
    pub id: QuestId,
    pub kind: DailyQuestKind,
    pub title: String,
    pub progress: u32,
    pub target: u32,
    pub xp: u32,
    pub claimed: bool,
}

impl DailyQuest {
    pub fn new(kind: DailyQuestKind, title: String, target: u32, xp: u32) -> Self {
        Self {
            id: QuestId::new(),
            kind,
            title,
            progress: 0,
            target,
            xp,
            claimed: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= self.target
    }
}
