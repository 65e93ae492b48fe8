//! Squads reducer
//!
//! Squads are a local-only simulation: peers are synthesized with randomized
//! stats near the user's own, and the squad quest is drawn from a static
//! catalog. No server authority exists.

use std::sync::Mutex;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::action::{Action, ActionDomain};
use crate::core::types::{SquadId, UserId};
use crate::model::{AppState, Squad, SquadMember, SquadQuest, PEER_NAMES, QUEST_CATALOG, ROSTER_SIZE};
use crate::progression;
use crate::reducer::DomainReducer;

pub struct SquadsReducer {
    // Locked only inside CreateSquad; every other path is rng-free.
    rng: Mutex<ChaCha8Rng>,
}

impl SquadsReducer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Deterministic roster synthesis for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for SquadsReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainReducer for SquadsReducer {
    fn name(&self) -> &'static str {
        "squads"
    }

    fn domains(&self) -> &'static [ActionDomain] {
        &[ActionDomain::Squads]
    }

    fn reduce(&self, state: &AppState, action: &Action) -> Option<AppState> {
        match action {
            Action::CreateSquad { name, at } => {
                // At most one squad per user.
                if state.squad.is_some() {
                    return None;
                }
                let level = progression::level_state(progression::total_earned_xp(state)).level;
                let weekly = progression::weekly_xp(state, *at);

                let mut rng = match self.rng.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let mut members = vec![SquadMember {
                    user_id: UserId::new(),
                    agent_name: state.agent_name.clone(),
                    level,
                    weekly_xp: weekly,
                    is_current_user: true,
                }];
                for peer_name in PEER_NAMES.choose_multiple(&mut *rng, ROSTER_SIZE - 1) {
                    let low = level.saturating_sub(2).max(1);
                    members.push(SquadMember {
                        user_id: UserId::new(),
                        agent_name: (*peer_name).to_string(),
                        level: rng.gen_range(low..=level + 2),
                        weekly_xp: rng.gen_range(0..600),
                        is_current_user: false,
                    });
                }
                let (title, description, target_xp) =
                    QUEST_CATALOG[rng.gen_range(0..QUEST_CATALOG.len())];

                let mut next = state.clone();
                next.squad = Some(Squad {
                    id: SquadId::new(),
                    name: name.clone(),
                    members,
                    quest: SquadQuest {
                        title: title.to_string(),
                        description: description.to_string(),
                        target_xp,
                    },
                });
                Some(next)
            }
            Action::LeaveSquad => {
                state.squad.as_ref()?;
                let mut next = state.clone();
                next.squad = None;
                Some(next)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create(reducer: &SquadsReducer, state: &AppState) -> Option<AppState> {
        reducer.reduce(
            state,
            &Action::CreateSquad {
                name: "Night Shift".into(),
                at: Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap(),
            },
        )
    }

    #[test]
    fn test_roster_shape() {
        let reducer = SquadsReducer::with_seed(7);
        let next = create(&reducer, &AppState::default()).unwrap();
        let squad = next.squad.unwrap();
        assert_eq!(squad.members.len(), ROSTER_SIZE);
        assert_eq!(
            squad.members.iter().filter(|m| m.is_current_user).count(),
            1
        );
        assert!(squad.members.iter().all(|m| m.level >= 1));
        assert!(QUEST_CATALOG
            .iter()
            .any(|(title, _, _)| *title == squad.quest.title));
    }

    #[test]
    fn test_second_create_is_noop() {
        let reducer = SquadsReducer::with_seed(7);
        let first = create(&reducer, &AppState::default()).unwrap();
        assert!(create(&reducer, &first).is_none());
    }

    #[test]
    fn test_leave_clears_and_reenables_create() {
        let reducer = SquadsReducer::with_seed(7);
        let joined = create(&reducer, &AppState::default()).unwrap();
        let left = reducer.reduce(&joined, &Action::LeaveSquad).unwrap();
        assert!(left.squad.is_none());
        // Leaving again has nothing to do.
        assert!(reducer.reduce(&left, &Action::LeaveSquad).is_none());
        assert!(create(&reducer, &left).is_some());
    }
}
