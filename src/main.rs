//! Questforge - Entry Point
//!
//! Loads the last persisted snapshot (or defaults), assembles the state
//! engine and the built-in command catalog, then feeds terminal key events
//! through the hotkey resolver until the user quits. The snapshot is saved
//! back on exit.

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use questforge::action::Action;
use questforge::command::builtin::register_builtin_commands;
use questforge::command::{CommandContext, CommandRegistry, HotkeyResolver};
use questforge::core::error::{Result, SnapshotError};
use questforge::model::AppState;
use questforge::persistence;
use questforge::progression;
use questforge::reducer::{StateEngine, Store};

#[derive(Parser, Debug)]
#[command(name = "questforge", about = "Gamified personal productivity engine")]
struct Args {
    /// Path to the persisted state snapshot
    #[arg(long, default_value = "questforge.json")]
    state: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("questforge=info")
        .init();

    let args = Args::parse();

    let initial = match persistence::load_snapshot(&args.state) {
        Ok(state) => state,
        Err(SnapshotError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %args.state.display(), "no snapshot found, starting fresh");
            AppState::default()
        }
        Err(err) => return Err(err.into()),
    };

    let engine = StateEngine::with_default_reducers()?;
    let mut store = Store::new(engine, initial);

    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);

    print_summary(&store);
    println!("Hotkeys:");
    for command in registry.all() {
        if let Some(hotkey) = command.hotkey {
            println!("  {hotkey:<8} {}", command.id);
        }
    }
    println!("  ctrl+q   quit");
    println!();

    terminal::enable_raw_mode()?;
    let outcome = run_loop(&mut store, &registry);
    terminal::disable_raw_mode()?;
    outcome?;

    persistence::save_snapshot(&args.state, &store.state())?;
    tracing::info!(path = %args.state.display(), "snapshot saved");
    Ok(())
}

fn run_loop(store: &mut Store, registry: &CommandRegistry) -> Result<()> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(());
        }

        let snapshot = store.state();
        let mut pending = Vec::new();
        {
            let mut dispatch = |action: Action| pending.push(action);
            let mut navigate = |path: &str| tracing::info!(path, "navigate");
            let translate = |key: &str| key.to_string();
            let mut ctx = CommandContext {
                dispatch: &mut dispatch,
                navigate: &mut navigate,
                state: snapshot.as_ref(),
                translate: &translate,
            };
            HotkeyResolver::handle(registry, &key, &mut ctx);
        }
        // Handlers only queue actions; they are applied here, in issue
        // order, once the context borrow ends.
        for action in pending {
            store.dispatch(action);
        }
    }
}

fn print_summary(store: &Store) {
    let state = store.state();
    let level = progression::level_state(progression::total_earned_xp(&state));
    println!("=== QUESTFORGE ===");
    println!(
        "Level {} ({}%), spendable XP {}, {} open tasks",
        level.level,
        level.progress_percent,
        progression::spendable_xp(&state),
        state.tasks.iter().filter(|t| !t.completed).count()
    );
    println!();
}
