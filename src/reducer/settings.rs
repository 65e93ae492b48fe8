//! Settings reducer: theme, language, sound, agent identity, API keys
//!
//! Any structural change to the key set (add/remove/enable-toggle) resets
//! `last_used_api_key_index` to 0 so rotation can never point past the end
//! of a shorter list.

use crate::action::{Action, ActionDomain};
use crate::model::{ApiKey, AppState};
use crate::reducer::DomainReducer;

pub struct SettingsReducer;

impl DomainReducer for SettingsReducer {
    fn name(&self) -> &'static str {
        "settings"
    }

    fn domains(&self) -> &'static [ActionDomain] {
        &[ActionDomain::Settings]
    }

    fn reduce(&self, state: &AppState, action: &Action) -> Option<AppState> {
        match action {
            Action::SetTheme { theme } => {
                if state.theme == *theme {
                    return None;
                }
                let mut next = state.clone();
                next.theme = theme.clone();
                Some(next)
            }
            Action::SetLanguage { language } => {
                if state.language == *language {
                    return None;
                }
                let mut next = state.clone();
                next.language = language.clone();
                Some(next)
            }
            Action::SetSoundEnabled { enabled } => {
                if state.sound_enabled == *enabled {
                    return None;
                }
                let mut next = state.clone();
                next.sound_enabled = *enabled;
                Some(next)
            }
            Action::SetAgentName { name } => {
                if state.agent_name == *name {
                    return None;
                }
                let mut next = state.clone();
                next.agent_name = name.clone();
                Some(next)
            }
            Action::CompleteOnboarding => {
                if state.onboarding_complete {
                    return None;
                }
                let mut next = state.clone();
                next.onboarding_complete = true;
                Some(next)
            }
            Action::SetWeekStart { weekday } => {
                if state.week_starts_on == *weekday {
                    return None;
                }
                let mut next = state.clone();
                next.week_starts_on = *weekday;
                Some(next)
            }
            Action::SetLocalAiEndpoint { endpoint } => {
                if state.local_ai_endpoint == *endpoint {
                    return None;
                }
                let mut next = state.clone();
                next.local_ai_endpoint = endpoint.clone();
                Some(next)
            }
            Action::AddApiKey { label, key } => {
                let mut next = state.clone();
                next.api_keys.push(ApiKey::new(label.clone(), key.clone()));
                next.last_used_api_key_index = 0;
                Some(next)
            }
            Action::RemoveApiKey { id } => {
                let idx = state.api_keys.iter().position(|k| k.id == *id)?;
                let mut next = state.clone();
                next.api_keys.remove(idx);
                next.last_used_api_key_index = 0;
                Some(next)
            }
            Action::ToggleApiKey { id } => {
                let idx = state.api_keys.iter().position(|k| k.id == *id)?;
                let mut next = state.clone();
                next.api_keys[idx].enabled = !next.api_keys[idx].enabled;
                next.last_used_api_key_index = 0;
                Some(next)
            }
            Action::MarkApiKeyUsed { index } => {
                if *index >= state.api_keys.len() || state.last_used_api_key_index == *index {
                    return None;
                }
                let mut next = state.clone();
                next.last_used_api_key_index = *index;
                Some(next)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: &AppState, action: Action) -> Option<AppState> {
        SettingsReducer.reduce(state, &action)
    }

    fn with_keys(n: usize) -> AppState {
        let mut state = AppState::default();
        for i in 0..n {
            state = reduce(
                &state,
                Action::AddApiKey {
                    label: format!("key-{i}"),
                    key: format!("sk-{i}"),
                },
            )
            .unwrap();
        }
        state
    }

    #[test]
    fn test_same_theme_is_noop() {
        let state = AppState::default();
        assert!(reduce(
            &state,
            Action::SetTheme {
                theme: state.theme.clone()
            }
        )
        .is_none());
    }

    #[test]
    fn test_structural_key_changes_reset_rotation_index() {
        let mut state = with_keys(3);
        state = reduce(&state, Action::MarkApiKeyUsed { index: 2 }).unwrap();
        assert_eq!(state.last_used_api_key_index, 2);

        let id = state.api_keys[1].id;
        let toggled = reduce(&state, Action::ToggleApiKey { id }).unwrap();
        assert_eq!(toggled.last_used_api_key_index, 0);

        let mut state = reduce(&state, Action::MarkApiKeyUsed { index: 2 }).unwrap_or(state);
        state = reduce(&state, Action::RemoveApiKey { id }).unwrap();
        assert_eq!(state.last_used_api_key_index, 0);
    }

    #[test]
    fn test_mark_used_rejects_out_of_bounds() {
        let state = with_keys(2);
        assert!(reduce(&state, Action::MarkApiKeyUsed { index: 5 }).is_none());
    }
}
