//! Skills reducer
//!
//! Skill names are unique case-insensitively; a duplicate add is a no-op,
//! not an error.

use crate::action::{Action, ActionDomain};
use crate::model::{AppState, Skill};
use crate::reducer::DomainReducer;

pub struct SkillsReducer;

impl DomainReducer for SkillsReducer {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn domains(&self) -> &'static [ActionDomain] {
        &[ActionDomain::Skills]
    }

    fn reduce(&self, state: &AppState, action: &Action) -> Option<AppState> {
        match action {
            Action::AddSkill { name } => {
                let trimmed = name.trim();
                if trimmed.is_empty() || state.skill_index(trimmed).is_some() {
                    return None;
                }
                let mut next = state.clone();
                next.skills.push(Skill::new(trimmed.to_string()));
                Some(next)
            }
            Action::AddSkillXp { name, amount } => {
                if *amount == 0 {
                    return None;
                }
                let idx = state.skill_index(name)?;
                let mut next = state.clone();
                next.skills[idx].xp = next.skills[idx].xp.saturating_add(*amount);
                Some(next)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_skill_name_is_noop() {
        let state = AppState::default();
        let state = SkillsReducer
            .reduce(&state, &Action::AddSkill { name: "Focus".into() })
            .unwrap();
        assert!(SkillsReducer
            .reduce(&state, &Action::AddSkill { name: "focus".into() })
            .is_none());
        assert_eq!(state.skills.len(), 1);
    }

    #[test]
    fn test_blank_name_is_noop() {
        assert!(SkillsReducer
            .reduce(&AppState::default(), &Action::AddSkill { name: "  ".into() })
            .is_none());
    }

    #[test]
    fn test_skill_xp_lookup_is_case_insensitive() {
        let state = SkillsReducer
            .reduce(&AppState::default(), &Action::AddSkill { name: "Focus".into() })
            .unwrap();
        let next = SkillsReducer
            .reduce(
                &state,
                &Action::AddSkillXp {
                    name: "FOCUS".into(),
                    amount: 15,
                },
            )
            .unwrap();
        assert_eq!(next.skills[0].xp, 15);
    }

    #[test]
    fn test_xp_for_unknown_skill_is_noop() {
        assert!(SkillsReducer
            .reduce(
                &AppState::default(),
                &Action::AddSkillXp {
                    name: "Focus".into(),
                    amount: 15,
                },
            )
            .is_none());
    }
}
