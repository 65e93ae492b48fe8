//! Task list and cache inventory reducer
//!
//! Owns two domains: ordinary task CRUD/completion and the cache/boost
//! inventory. Cache XP loot is folded into the task history as a completed
//! pseudo-task so the economy has a single income stream.

use chrono::{DateTime, Utc};

use crate::action::{Action, ActionDomain, CacheLoot};
use crate::core::types::BoostId;
use crate::model::{AppState, Boost, Task};
use crate::reducer::DomainReducer;

pub struct TaskInventoryReducer;

impl DomainReducer for TaskInventoryReducer {
    fn name(&self) -> &'static str {
        "tasks"
    }

    fn domains(&self) -> &'static [ActionDomain] {
        &[ActionDomain::Tasks, ActionDomain::Inventory]
    }

    fn reduce(&self, state: &AppState, action: &Action) -> Option<AppState> {
        match action {
            Action::AddTask {
                text,
                xp,
                due_date,
                priority,
                at,
            } => {
                let mut next = state.clone();
                next.tasks
                    .insert(0, Task::new(text.clone(), *xp, *due_date, *priority, *at));
                Some(next)
            }
            Action::CompleteTask { id, at } => {
                let idx = state.tasks.iter().position(|t| t.id == *id)?;
                if state.tasks[idx].completed {
                    return None;
                }
                let multiplier = active_boost_multiplier(state, *at);
                let mut next = state.clone();
                let task = &mut next.tasks[idx];
                task.completed = true;
                task.completed_at = Some(*at);
                task.xp = scale_xp(task.xp, multiplier);
                advance_task_quests(&mut next);
                Some(next)
            }
            Action::DeleteTask { id } => {
                let idx = state.tasks.iter().position(|t| t.id == *id)?;
                let mut next = state.clone();
                next.tasks.remove(idx);
                Some(next)
            }
            Action::AwardCache { cache_type } => {
                let mut next = state.clone();
                *next.inventory.caches.entry(*cache_type).or_insert(0) += 1;
                next.inventory.new_caches += 1;
                Some(next)
            }
            Action::OpenCache { cache_type, loot } => {
                let mut next = state.clone();
                // Decrement first, floored at zero, then apply loot.
                if let Some(count) = next.inventory.caches.get_mut(cache_type) {
                    *count = count.saturating_sub(1);
                }
                match loot {
                    CacheLoot::Xp { amount, at } => {
                        next.tasks.insert(0, Task::cache_loot(*amount, *at));
                    }
                    CacheLoot::Boost {
                        multiplier,
                        expires_at,
                    } => {
                        next.inventory.boosts.push(Boost {
                            id: BoostId::new(),
                            multiplier: *multiplier,
                            expires_at: *expires_at,
                        });
                    }
                }
                Some(next)
            }
            Action::DismissNewCacheNotifier => {
                if state.inventory.new_caches == 0 {
                    return None;
                }
                let mut next = state.clone();
                next.inventory.new_caches = 0;
                Some(next)
            }
            _ => None,
        }
    }
}

/// Product of all boost multipliers still live at `at`. Empty product is 1.
fn active_boost_multiplier(state: &AppState, at: DateTime<Utc>) -> f64 {
    state
        .inventory
        .boosts
        .iter()
        .filter(|b| b.expires_at > at)
        .map(|b| b.multiplier)
        .product()
}

fn scale_xp(xp: u32, multiplier: f64) -> u32 {
    if (multiplier - 1.0).abs() < f64::EPSILON {
        return xp;
    }
    (xp as f64 * multiplier).round() as u32
}

/// Completing a task advances unclaimed complete-tasks daily quests within
/// the same transition.
fn advance_task_quests(state: &mut AppState) {
    for quest in &mut state.daily_quests {
        if quest.kind == crate::model::DailyQuestKind::CompleteTasks
            && !quest.claimed
            && quest.progress < quest.target
        {
            quest.progress += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CacheType, Priority};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap()
    }

    fn reduce(state: &AppState, action: Action) -> Option<AppState> {
        TaskInventoryReducer.reduce(state, &action)
    }

    #[test]
    fn test_complete_task_stamps_and_scales() {
        let mut state = AppState::default();
        state
            .tasks
            .push(Task::new("read".into(), 40, None, Priority::Low, now()));
        state.inventory.boosts.push(Boost {
            id: BoostId::new(),
            multiplier: 1.5,
            expires_at: now() + Duration::hours(1),
        });
        let id = state.tasks[0].id;
        let next = reduce(&state, Action::CompleteTask { id, at: now() }).unwrap();
        assert!(next.tasks[0].completed);
        assert_eq!(next.tasks[0].completed_at, Some(now()));
        assert_eq!(next.tasks[0].xp, 60);
    }

    #[test]
    fn test_expired_boost_does_not_scale() {
        let mut state = AppState::default();
        state
            .tasks
            .push(Task::new("read".into(), 40, None, Priority::Low, now()));
        state.inventory.boosts.push(Boost {
            id: BoostId::new(),
            multiplier: 2.0,
            expires_at: now() - Duration::hours(1),
        });
        let id = state.tasks[0].id;
        let next = reduce(&state, Action::CompleteTask { id, at: now() }).unwrap();
        assert_eq!(next.tasks[0].xp, 40);
    }

    #[test]
    fn test_complete_twice_is_noop() {
        let mut state = AppState::default();
        state
            .tasks
            .push(Task::new("read".into(), 40, None, Priority::Low, now()));
        let id = state.tasks[0].id;
        let once = reduce(&state, Action::CompleteTask { id, at: now() }).unwrap();
        assert!(reduce(&once, Action::CompleteTask { id, at: now() }).is_none());
    }

    #[test]
    fn test_award_cache_bumps_both_counters() {
        let state = AppState::default();
        let next = reduce(
            &state,
            Action::AwardCache {
                cache_type: CacheType::Rare,
            },
        )
        .unwrap();
        assert_eq!(next.inventory.count(CacheType::Rare), 1);
        assert_eq!(next.inventory.new_caches, 1);
    }

    #[test]
    fn test_open_cache_on_zero_count_floors() {
        let state = AppState::default();
        let next = reduce(
            &state,
            Action::OpenCache {
                cache_type: CacheType::Common,
                loot: CacheLoot::Xp {
                    amount: 10,
                    at: now(),
                },
            },
        )
        .unwrap();
        assert_eq!(next.inventory.count(CacheType::Common), 0);
    }

    #[test]
    fn test_open_cache_xp_loot_synthesizes_completed_task() {
        let mut state = AppState::default();
        state.inventory.caches.insert(CacheType::Common, 2);
        let next = reduce(
            &state,
            Action::OpenCache {
                cache_type: CacheType::Common,
                loot: CacheLoot::Xp {
                    amount: 25,
                    at: now(),
                },
            },
        )
        .unwrap();
        assert_eq!(next.inventory.count(CacheType::Common), 1);
        assert!(next.tasks[0].completed);
        assert_eq!(next.tasks[0].xp, 25);
    }

    #[test]
    fn test_dismiss_notifier_leaves_totals() {
        let mut state = AppState::default();
        state.inventory.caches.insert(CacheType::Epic, 3);
        state.inventory.new_caches = 2;
        let next = reduce(&state, Action::DismissNewCacheNotifier).unwrap();
        assert_eq!(next.inventory.new_caches, 0);
        assert_eq!(next.inventory.count(CacheType::Epic), 3);
        // Already-zero notifier is a no-op.
        assert!(reduce(&next, Action::DismissNewCacheNotifier).is_none());
    }
}
