//! Misc reducer: daily quests, pomodoro counters, review/briefing stamps

use crate::action::{Action, ActionDomain};
use crate::model::{AppState, DailyQuestKind, Task};
use crate::reducer::DomainReducer;

pub struct MiscReducer;

impl DomainReducer for MiscReducer {
    fn name(&self) -> &'static str {
        "misc"
    }

    fn domains(&self) -> &'static [ActionDomain] {
        &[ActionDomain::Misc]
    }

    fn reduce(&self, state: &AppState, action: &Action) -> Option<AppState> {
        match action {
            Action::SetDailyQuests { quests } => {
                let mut next = state.clone();
                next.daily_quests = quests.clone();
                Some(next)
            }
            Action::ClaimDailyQuest { id, at } => {
                let idx = state.daily_quests.iter().position(|q| q.id == *id)?;
                let quest = &state.daily_quests[idx];
                if quest.claimed || !quest.is_complete() {
                    return None;
                }
                let mut next = state.clone();
                next.daily_quests[idx].claimed = true;
                // Quest XP joins the economy through the same completed-task
                // path as cache loot.
                let title = next.daily_quests[idx].title.clone();
                let xp = next.daily_quests[idx].xp;
                next.tasks.insert(0, Task::quest_claim(&title, xp, *at));
                Some(next)
            }
            Action::RecordPomodoroSession { day } => {
                let mut next = state.clone();
                *next.pomodoro_sessions.entry(*day).or_insert(0) += 1;
                for quest in &mut next.daily_quests {
                    if quest.kind == DailyQuestKind::FocusSession
                        && !quest.claimed
                        && quest.progress < quest.target
                    {
                        quest.progress += 1;
                    }
                }
                Some(next)
            }
            Action::SetLastWeeklyReview { at } => {
                let mut next = state.clone();
                next.last_weekly_review = Some(*at);
                Some(next)
            }
            Action::SetLastBriefing { at } => {
                let mut next = state.clone();
                next.last_briefing = Some(*at);
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
    use crate::progression;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_claim_requires_completion() {
        let at = Utc.with_ymd_and_hms(2026, 8, 26, 18, 0, 0).unwrap();
        let mut state = AppState::default();
        state.daily_quests.push(DailyQuest::new(
            DailyQuestKind::CompleteTasks,
            "Finish three tasks".into(),
            3,
            30,
        ));
        let id = state.daily_quests[0].id;
        assert!(MiscReducer
            .reduce(&state, &Action::ClaimDailyQuest { id, at })
            .is_none());

        state.daily_quests[0].progress = 3;
        let next = MiscReducer
            .reduce(&state, &Action::ClaimDailyQuest { id, at })
            .unwrap();
        assert!(next.daily_quests[0].claimed);
        assert_eq!(progression::total_earned_xp(&next), 30);
        // Claiming again is a no-op.
        assert!(MiscReducer
            .reduce(&next, &Action::ClaimDailyQuest { id, at })
            .is_none());
    }

    #[test]
    fn test_pomodoro_counts_per_day_and_feeds_focus_quests() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let mut state = AppState::default();
        state.daily_quests.push(DailyQuest::new(
            DailyQuestKind::FocusSession,
            "Two focus sessions".into(),
            2,
            25,
        ));
        let state = MiscReducer
            .reduce(&state, &Action::RecordPomodoroSession { day })
            .unwrap();
        let state = MiscReducer
            .reduce(&state, &Action::RecordPomodoroSession { day })
            .unwrap();
        assert_eq!(state.pomodoro_sessions.get(&day), Some(&2));
        assert_eq!(state.daily_quests[0].progress, 2);
    }
}
