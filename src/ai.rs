//! AI collaborator boundary
//!
//! The core owns credentials and rotation order but performs no network I/O;
//! the collaborator making the actual calls reads the next key here and
//! commits the rotation with [`Action::MarkApiKeyUsed`](crate::action::Action).

use crate::model::{ApiKey, AppState};

/// True when at least one enabled credential or a local endpoint is
/// configured.
pub fn can_use_ai(state: &AppState) -> bool {
    state.local_ai_endpoint.is_some() || state.api_keys.iter().any(|k| k.enabled)
}

/// Next enabled key in round-robin order after `last_used_api_key_index`,
/// plus the index the caller should commit once the key is actually used.
pub fn next_api_key(state: &AppState) -> Option<(ApiKey, usize)> {
    let len = state.api_keys.len();
    if len == 0 {
        return None;
    }
    let start = (state.last_used_api_key_index + 1) % len;
    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&idx| state.api_keys[idx].enabled)
        .map(|idx| (state.api_keys[idx].clone(), idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_keys(n: usize) -> AppState {
        let mut state = AppState::default();
        for i in 0..n {
            state
                .api_keys
                .push(ApiKey::new(format!("key-{i}"), format!("sk-{i}")));
        }
        state
    }

    #[test]
    fn test_can_use_ai_needs_enabled_key_or_endpoint() {
        let mut state = AppState::default();
        assert!(!can_use_ai(&state));
        state.api_keys.push(ApiKey::new("k".into(), "sk".into()));
        assert!(can_use_ai(&state));
        state.api_keys[0].enabled = false;
        assert!(!can_use_ai(&state));
        state.local_ai_endpoint = Some("http://localhost:11434".into());
        assert!(can_use_ai(&state));
    }

    #[test]
    fn test_rotation_skips_disabled_keys() {
        let mut state = with_keys(3);
        state.api_keys[1].enabled = false;
        state.last_used_api_key_index = 0;
        let (key, idx) = next_api_key(&state).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(key.label, "key-2");
    }

    #[test]
    fn test_rotation_wraps_around() {
        let mut state = with_keys(3);
        state.last_used_api_key_index = 2;
        let (_, idx) = next_api_key(&state).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_no_enabled_keys_yields_none() {
        let mut state = with_keys(2);
        for key in &mut state.api_keys {
            key.enabled = false;
        }
        assert!(next_api_key(&state).is_none());
    }
}
