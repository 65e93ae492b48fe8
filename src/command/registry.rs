//! Process-wide command catalog
//!
//! Registered once at startup and read-only thereafter. Re-registration
//! under an existing id overwrites with a warning, never a hard failure;
//! the original slot is reused so registration order, and with it hotkey
//! tie-breaking, stays deterministic.

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;

use crate::action::Action;
use crate::command::hotkeys::Hotkey;
use crate::model::AppState;

/// Context bundle injected into command handlers. Handlers are pure with
/// respect to anything outside this bundle; in particular `state` is a
/// read-only snapshot that must not be mutated around the store.
pub struct CommandContext<'a> {
    pub dispatch: &'a mut dyn FnMut(Action),
    pub navigate: &'a mut dyn FnMut(&str),
    pub state: &'a AppState,
    pub translate: &'a dyn Fn(&str) -> String,
}

pub type CommandHandler = Arc<dyn Fn(&mut CommandContext<'_>) + Send + Sync>;

#[derive(Clone)]
pub struct Command {
    /// Globally unique, stable identifier
    pub id: String,
    /// Localization key for the display title
    pub title_key: String,
    /// Localization key for the description
    pub description_key: String,
    pub icon: String,
    pub section: Option<String>,
    pub hotkey: Option<Hotkey>,
    pub handler: CommandHandler,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("title_key", &self.title_key)
            .field("section", &self.section)
            .field("hotkey", &self.hotkey)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    index: AHashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts by id; an existing id is overwritten in place with a warning.
    pub fn register(&mut self, command: Command) {
        if let Some(&idx) = self.index.get(&command.id) {
            tracing::warn!(id = %command.id, "command re-registered, overwriting previous handler");
            self.commands[idx] = command;
        } else {
            self.index.insert(command.id.clone(), self.commands.len());
            self.commands.push(command);
        }
    }

    /// All commands in registration order.
    pub fn all(&self) -> &[Command] {
        &self.commands
    }

    pub fn get(&self, id: &str) -> Option<&Command> {
        self.index.get(id).map(|&idx| &self.commands[idx])
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Runs the command with the given id. Returns false when no such
    /// command is registered.
    pub fn execute(&self, id: &str, ctx: &mut CommandContext<'_>) -> bool {
        match self.get(id) {
            Some(command) => {
                (command.handler)(ctx);
                true
            }
            None => false,
        }
    }
}
