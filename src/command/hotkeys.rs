//! Hotkey grammar and resolution
//!
//! Bindings use the grammar `mod+<key>`: one "mod" slot resolving to the
//! platform primary modifier (the command key on macOS, control elsewhere)
//! plus exactly one literal key. Matching is case-insensitive on the literal
//! key and stops at the first registered match.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::registry::{Command, CommandContext, CommandRegistry};

#[cfg(target_os = "macos")]
const PRIMARY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;
#[cfg(not(target_os = "macos"))]
const PRIMARY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// A parsed `mod+<key>` binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    key: char,
}

impl Hotkey {
    /// Parses `mod+<key>`. Anything else (no `mod` slot, more than one
    /// literal key) is rejected.
    pub fn parse(binding: &str) -> Option<Self> {
        let rest = binding.strip_prefix("mod+")?;
        let mut chars = rest.chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self {
            key: key.to_ascii_lowercase(),
        })
    }

    pub fn matches(&self, chord: &KeyChord) -> bool {
        chord.primary_modifier && chord.key.to_ascii_lowercase() == self.key
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mod+{}", self.key)
    }
}

/// Platform-normalized chord extracted from a terminal key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub primary_modifier: bool,
    pub key: char,
}

impl KeyChord {
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        let KeyCode::Char(key) = event.code else {
            return None;
        };
        Some(Self {
            primary_modifier: event.modifiers.contains(PRIMARY_MODIFIER),
            key,
        })
    }
}

/// Scans registered commands per keystroke and fires the first hotkey match.
pub struct HotkeyResolver;

impl HotkeyResolver {
    /// First registered command whose binding matches the chord.
    /// Registration order is the deterministic tie-break.
    pub fn resolve<'a>(registry: &'a CommandRegistry, chord: &KeyChord) -> Option<&'a Command> {
        registry
            .all()
            .iter()
            .find(|c| c.hotkey.is_some_and(|h| h.matches(chord)))
    }

    /// Handles one key event. On a match the command executes exactly once
    /// and `true` is returned so the caller suppresses the event's default
    /// behavior; `false` means the event was not a bound chord.
    pub fn handle(
        registry: &CommandRegistry,
        event: &KeyEvent,
        ctx: &mut CommandContext<'_>,
    ) -> bool {
        let Some(chord) = KeyChord::from_key_event(event) else {
            return false;
        };
        if !chord.primary_modifier {
            return false;
        }
        match Self::resolve(registry, &chord) {
            Some(command) => {
                (command.handler)(ctx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_single_literal_key() {
        assert_eq!(Hotkey::parse("mod+k"), Some(Hotkey { key: 'k' }));
        assert_eq!(Hotkey::parse("mod+K"), Some(Hotkey { key: 'k' }));
        assert!(Hotkey::parse("mod+").is_none());
        assert!(Hotkey::parse("mod+kk").is_none());
        assert!(Hotkey::parse("ctrl+k").is_none());
        assert!(Hotkey::parse("k").is_none());
    }

    #[test]
    fn test_match_is_case_insensitive_and_needs_modifier() {
        let hotkey = Hotkey::parse("mod+k").unwrap();
        assert!(hotkey.matches(&KeyChord {
            primary_modifier: true,
            key: 'K',
        }));
        assert!(!hotkey.matches(&KeyChord {
            primary_modifier: false,
            key: 'k',
        }));
    }

    #[test]
    fn test_display_round_trips() {
        let hotkey = Hotkey::parse("mod+J").unwrap();
        assert_eq!(hotkey.to_string(), "mod+j");
    }
}
