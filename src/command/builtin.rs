//! Built-in command catalog registered at startup

use std::sync::Arc;

use chrono::Utc;

use crate::action::Action;
use crate::command::hotkeys::Hotkey;
use crate::command::registry::{Command, CommandContext, CommandRegistry};

/// Theme cycle order for the `cycle-theme` command
pub const THEMES: &[&str] = &["dark", "light", "synthwave"];

fn command(
    id: &str,
    title_key: &str,
    description_key: &str,
    icon: &str,
    section: Option<&str>,
    hotkey: Option<&str>,
    handler: impl Fn(&mut CommandContext<'_>) + Send + Sync + 'static,
) -> Command {
    Command {
        id: id.to_string(),
        title_key: title_key.to_string(),
        description_key: description_key.to_string(),
        icon: icon.to_string(),
        section: section.map(str::to_string),
        hotkey: hotkey.and_then(Hotkey::parse),
        handler: Arc::new(handler),
    }
}

fn navigation(id: &str, title_key: &str, icon: &str, hotkey: &str, path: &'static str) -> Command {
    command(
        id,
        title_key,
        &format!("{title_key}.description"),
        icon,
        Some("navigation"),
        Some(hotkey),
        move |ctx| (ctx.navigate)(path),
    )
}

/// Registers the startup catalog. Safe to call once per process; calling it
/// again overwrites the same ids (with warnings) without disturbing order.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(navigation(
        "go-dashboard",
        "command.goDashboard",
        "home",
        "mod+d",
        "/dashboard",
    ));
    registry.register(navigation(
        "go-tasks",
        "command.goTasks",
        "check-square",
        "mod+t",
        "/tasks",
    ));
    registry.register(navigation(
        "go-journal",
        "command.goJournal",
        "book",
        "mod+j",
        "/journal",
    ));
    registry.register(navigation(
        "go-rewards",
        "command.goRewards",
        "gift",
        "mod+r",
        "/rewards",
    ));

    registry.register(command(
        "toggle-sound",
        "command.toggleSound",
        "command.toggleSound.description",
        "volume",
        Some("settings"),
        Some("mod+s"),
        |ctx| {
            let enabled = !ctx.state.sound_enabled;
            (ctx.dispatch)(Action::SetSoundEnabled { enabled });
        },
    ));

    registry.register(command(
        "cycle-theme",
        "command.cycleTheme",
        "command.cycleTheme.description",
        "palette",
        Some("settings"),
        Some("mod+m"),
        |ctx| {
            let current = THEMES
                .iter()
                .position(|t| *t == ctx.state.theme)
                .unwrap_or(0);
            let theme = THEMES[(current + 1) % THEMES.len()].to_string();
            (ctx.dispatch)(Action::SetTheme { theme });
        },
    ));

    registry.register(command(
        "dismiss-cache-notifier",
        "command.dismissCacheNotifier",
        "command.dismissCacheNotifier.description",
        "bell-off",
        Some("inventory"),
        None,
        |ctx| (ctx.dispatch)(Action::DismissNewCacheNotifier),
    ));

    registry.register(command(
        "weekly-review",
        "command.weeklyReview",
        "command.weeklyReview.description",
        "calendar",
        Some("review"),
        Some("mod+w"),
        |ctx| {
            (ctx.navigate)("/review");
            (ctx.dispatch)(Action::SetLastWeeklyReview { at: Utc::now() });
        },
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppState;

    #[test]
    fn test_catalog_registers_without_collisions() {
        let mut registry = CommandRegistry::new();
        register_builtin_commands(&mut registry);
        let count = registry.len();
        assert!(count >= 7);
        // Re-registering overwrites in place rather than growing the table.
        register_builtin_commands(&mut registry);
        assert_eq!(registry.len(), count);
    }

    #[test]
    fn test_cycle_theme_wraps() {
        let mut registry = CommandRegistry::new();
        register_builtin_commands(&mut registry);
        let mut state = AppState::default();
        state.theme = THEMES[THEMES.len() - 1].to_string();

        let mut dispatched = Vec::new();
        let mut dispatch = |action: Action| dispatched.push(action);
        let mut navigate = |_: &str| {};
        let translate = |key: &str| key.to_string();
        let mut ctx = CommandContext {
            dispatch: &mut dispatch,
            navigate: &mut navigate,
            state: &state,
            translate: &translate,
        };
        assert!(registry.execute("cycle-theme", &mut ctx));
        assert_eq!(
            dispatched,
            vec![Action::SetTheme {
                theme: THEMES[0].to_string()
            }]
        );
    }
}
