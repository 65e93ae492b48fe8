//! Snapshot persistence boundary
//!
//! Load and save are whole-tree JSON operations. `validate_snapshot` is the
//! gate in front of `ReplaceState`: the engine itself trusts its payload, so
//! the loader must reject malformed snapshots before dispatching.

use std::fs;
use std::path::Path;

use ahash::AHashSet;

use crate::core::error::SnapshotError;
use crate::model::AppState;

/// Reads, parses, and validates a snapshot. The result is safe to feed to
/// `Action::ReplaceState`.
pub fn load_snapshot(path: &Path) -> Result<AppState, SnapshotError> {
    let content = fs::read_to_string(path)?;
    let state: AppState = serde_json::from_str(&content)?;
    validate_snapshot(&state)?;
    Ok(state)
}

/// Writes the snapshot via a temp file and rename, so a crash mid-write
/// leaves the previous snapshot intact.
pub fn save_snapshot(path: &Path, state: &AppState) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(state)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Checks the data-model invariants a well-formed snapshot must satisfy.
pub fn validate_snapshot(state: &AppState) -> Result<(), SnapshotError> {
    let mut task_ids = AHashSet::new();
    for task in &state.tasks {
        if !task_ids.insert(task.id) {
            return Err(SnapshotError::DuplicateId {
                entity: "task",
                id: task.id.0.to_string(),
            });
        }
    }

    let mut reward_ids = AHashSet::new();
    for reward in &state.rewards {
        if !reward_ids.insert(reward.id) {
            return Err(SnapshotError::DuplicateId {
                entity: "reward",
                id: reward.id.0.to_string(),
            });
        }
    }

    let mut redemption_ids = AHashSet::new();
    let mut one_time_seen = AHashSet::new();
    for row in &state.redeemed_rewards {
        if !redemption_ids.insert(row.id) {
            return Err(SnapshotError::DuplicateId {
                entity: "redemption",
                id: row.id.0.to_string(),
            });
        }
        let one_time = state
            .reward(row.reward_id)
            .is_some_and(|reward| reward.is_one_time);
        if one_time && !one_time_seen.insert(row.reward_id) {
            return Err(SnapshotError::RepeatedOneTimeRedemption(row.reward_id));
        }
    }

    let mut skill_names = AHashSet::new();
    for skill in &state.skills {
        if !skill_names.insert(skill.name.to_lowercase()) {
            return Err(SnapshotError::DuplicateSkillName(skill.name.clone()));
        }
    }

    let len = state.api_keys.len();
    let index = state.last_used_api_key_index;
    if index != 0 && index >= len {
        return Err(SnapshotError::ApiKeyIndexOutOfBounds { index, len });
    }

    Ok(())
}
