//! Progression calculator: level curve, XP economy, weekly windows
//!
//! Everything here is derived fresh from the task/reward/redemption history.
//! Nothing is cached in state, so the stored balance can never drift from
//! the ledger. For a fixed history and a fixed `now`, every function returns
//! identical results on repeated calls.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

use crate::model::AppState;

/// Quadratic level curve coefficient: cumulative XP to reach level n is
/// `LEVEL_STEP * (n - 1) * n`, so each level-up costs `2 * LEVEL_STEP * level`
/// more than a flat curve would. Level 1 sits at 0 XP and the gap to the
/// next level is always positive.
const LEVEL_STEP: u64 = 50;

/// Derived level position for a given cumulative XP total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelState {
    pub level: u32,
    /// XP earned past the current level's threshold
    pub xp_into_level: u64,
    /// Width of the current level band; always > 0
    pub xp_for_next_level: u64,
    /// Fractional progress through the current level, 0..=100
    pub progress_percent: u8,
}

/// Cumulative XP required to reach `level`. Level 1 requires 0.
pub fn xp_required_for_level(level: u32) -> u64 {
    let l = level as u64;
    LEVEL_STEP * l.saturating_sub(1) * l
}

/// Total earned XP: the sum of `xp` over completed tasks. Cache loot and
/// quest claims flow through completed pseudo-tasks, so this one sum is the
/// whole economy's income side.
pub fn total_earned_xp(state: &AppState) -> u64 {
    state
        .tasks
        .iter()
        .filter(|t| t.completed)
        .map(|t| t.xp as u64)
        .sum()
}

/// Maps cumulative XP to the current level, the next threshold, and the
/// fractional progress within the current band.
pub fn level_state(total_xp: u64) -> LevelState {
    let mut level = 1u32;
    while xp_required_for_level(level + 1) <= total_xp {
        level += 1;
    }
    let floor = xp_required_for_level(level);
    let ceiling = xp_required_for_level(level + 1);
    let xp_into_level = total_xp - floor;
    let xp_for_next_level = ceiling - floor;
    let progress_percent = ((xp_into_level * 100) / xp_for_next_level) as u8;
    LevelState {
        level,
        xp_into_level,
        xp_for_next_level,
        progress_percent,
    }
}

/// Spendable XP: earned minus the cost of every ledger row, each resolved
/// against the reward's *current* cost. A reward deleted after redemption
/// resolves to 0.
pub fn spendable_xp(state: &AppState) -> i64 {
    let earned = total_earned_xp(state) as i64;
    let spent: i64 = state
        .redeemed_rewards
        .iter()
        .map(|row| {
            state
                .reward(row.reward_id)
                .map_or(0, |reward| reward.cost as i64)
        })
        .sum();
    earned - spent
}

/// First day of the calendar week containing `date`, for a week starting on
/// `starts_on`.
pub fn week_start(date: NaiveDate, starts_on: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() as i64
        - starts_on.num_days_from_monday() as i64)
        % 7;
    date - Duration::days(offset)
}

fn xp_completed_in_week(state: &AppState, start: NaiveDate) -> u64 {
    let end = start + Duration::days(7);
    state
        .tasks
        .iter()
        .filter(|t| t.completed)
        .filter(|t| {
            t.completed_at.map_or(false, |ts| {
                let day = ts.date_naive();
                day >= start && day < end
            })
        })
        .map(|t| t.xp as u64)
        .sum()
}

/// XP from tasks completed within the calendar week containing `now`.
/// Feeds streaks, leaderboards, and squad-quest snapshots.
pub fn weekly_xp(state: &AppState, now: DateTime<Utc>) -> u64 {
    let start = week_start(now.date_naive(), state.week_starts_on);
    xp_completed_in_week(state, start)
}

/// Consecutive weeks with at least one completed task, counting back from
/// the week containing `now`. A quiet current week does not yet break the
/// streak; it just is not counted.
pub fn streak_weeks(state: &AppState, now: DateTime<Utc>) -> u32 {
    let mut start = week_start(now.date_naive(), state.week_starts_on);
    if xp_completed_in_week(state, start) == 0 {
        start = start - Duration::days(7);
    }
    let mut streak = 0;
    while xp_completed_in_week(state, start) > 0 {
        streak += 1;
        start = start - Duration::days(7);
    }
    streak
}
