//! Journal reducer
//!
//! Adding an entry also advances any unclaimed write-journal daily quest in
//! the same transition, so quest progress is derived from the action itself
//! rather than recomputed later.

use crate::action::{Action, ActionDomain};
use crate::model::{AppState, DailyQuestKind, JournalEntry};
use crate::reducer::DomainReducer;

pub struct JournalReducer;

impl DomainReducer for JournalReducer {
    fn name(&self) -> &'static str {
        "journal"
    }

    fn domains(&self) -> &'static [ActionDomain] {
        &[ActionDomain::Journal]
    }

    fn reduce(&self, state: &AppState, action: &Action) -> Option<AppState> {
        match action {
            Action::AddJournalEntry { text, at } => {
                let mut next = state.clone();
                next.journal_entries
                    .insert(0, JournalEntry::new(text.clone(), *at));
                for quest in &mut next.daily_quests {
                    if quest.kind == DailyQuestKind::WriteJournal
                        && !quest.claimed
                        && quest.progress < quest.target
                    {
                        quest.progress += 1;
                    }
                }
                Some(next)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DailyQuest;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_entry_prepended_and_quest_advanced() {
        let at = Utc.with_ymd_and_hms(2026, 8, 26, 9, 0, 0).unwrap();
        let mut state = AppState::default();
        state.journal_entries.push(JournalEntry::new("old".into(), at));
        state.daily_quests.push(DailyQuest::new(
            DailyQuestKind::WriteJournal,
            "Write one entry".into(),
            1,
            20,
        ));
        state.daily_quests.push(DailyQuest::new(
            DailyQuestKind::CompleteTasks,
            "Finish three tasks".into(),
            3,
            30,
        ));

        let next = JournalReducer
            .reduce(
                &state,
                &Action::AddJournalEntry {
                    text: "new".into(),
                    at,
                },
            )
            .unwrap();

        assert_eq!(next.journal_entries[0].text, "new");
        assert_eq!(next.daily_quests[0].progress, 1);
        // Other quest kinds are untouched.
        assert_eq!(next.daily_quests[1].progress, 0);
    }

    #[test]
    fn test_quest_progress_caps_at_target() {
        let at = Utc.with_ymd_and_hms(2026, 8, 26, 9, 0, 0).unwrap();
        let mut state = AppState::default();
        let mut quest = DailyQuest::new(DailyQuestKind::WriteJournal, "Write".into(), 1, 20);
        quest.progress = 1;
        state.daily_quests.push(quest);

        let next = JournalReducer
            .reduce(
                &state,
                &Action::AddJournalEntry {
                    text: "more".into(),
                    at,
                },
            )
            .unwrap();
        assert_eq!(next.daily_quests[0].progress, 1);
    }
}
