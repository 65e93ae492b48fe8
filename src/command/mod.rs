//! Command layer
//!
//! A flat, polymorphic catalog of executable commands, each optionally bound
//! to a hotkey. Every command has the same shape and is invoked uniformly
//! through an injected context, whatever it actually does.

pub mod builtin;
pub mod hotkeys;
pub mod registry;

pub use hotkeys::{Hotkey, HotkeyResolver, KeyChord};
pub use registry::{Command, CommandContext, CommandHandler, CommandRegistry};
