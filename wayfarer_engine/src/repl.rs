//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`World`]. Handlers
//! never print directly: they push [`ViewItem`]s, and the loop flushes the
//! view once per line of input.

pub mod input;
pub mod item;
pub mod look;
pub mod movement;
pub mod npc;
pub mod riddle;
pub mod system;

pub use item::*;
pub use look::*;
pub use movement::*;
pub use npc::*;
pub use riddle::*;
pub use system::*;

use crate::command::{Command, parse_input, resolve_command};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::World;

use anyhow::Result;
use log::info;

use input::{InputEvent, InputManager};

/// Run the main read-eval-print loop until the running flag clears.
///
/// Handles prompting, parsing, dispatching to the handler modules, and
/// flushing the view. End-of-input and interrupts become an orderly
/// goodbye instead of an abrupt failure.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl(world: &mut World) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();

    while world.player.running {
        let prompt = "> ".prompt_style().to_string();
        let Ok(event) = input_manager.read_line(&prompt) else {
            view.push(ViewItem::Error("Failed to read input. Try again.".to_string()));
            view.flush();
            continue;
        };

        match event {
            InputEvent::Line(line) => dispatch(world, &mut view, &line)?,
            InputEvent::Eof | InputEvent::Interrupted => {
                info!("input ended; shutting down");
                view.push(ViewItem::EngineMessage("Goodbye.".to_string()));
                world.player.running = false;
            },
        }
        view.flush();
    }
    Ok(())
}

/// Parse one raw line and route it to the matching handler.
///
/// This is the engine's whole per-line contract: state mutation happens in
/// the handlers, emitted messages land in the view, and win/lose checks run
/// inside the state-changing handlers themselves.
///
/// # Errors
/// - Propagates handler failures (all of which indicate a broken world, not
///   bad player input).
pub fn dispatch(world: &mut World, view: &mut View, line: &str) -> Result<()> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    match resolve_command(parse_input(line)) {
        Nothing => {},
        Quit => quit_handler(world, view),
        Look => look_handler(world, view)?,
        Inventory => inventory_handler(world, view),
        Help => help_handler(view),
        Tasks => tasks_handler(world, view)?,
        Hint => hint_handler(world, view)?,
        Go(Some(direction)) => move_to_handler(world, view, &direction)?,
        Go(None) => view.push(ViewItem::EngineMessage("Go where?".to_string())),
        Take(Some(item)) => take_handler(world, view, &item)?,
        Take(None) => view.push(ViewItem::EngineMessage("Take what?".to_string())),
        Drop(Some(item)) => drop_handler(world, view, &item)?,
        Drop(None) => view.push(ViewItem::EngineMessage("Drop what?".to_string())),
        Use(Some(arg)) => use_handler(world, view, &arg)?,
        Use(None) => view.push(ViewItem::EngineMessage("Use what?".to_string())),
        Talk(Some(name)) => talk_handler(world, view, &name)?,
        Talk(None) => view.push(ViewItem::EngineMessage("Talk to whom?".to_string())),
        Examine(Some(item)) => examine_handler(world, view, &item)?,
        Examine(None) => view.push(ViewItem::EngineMessage("Examine what?".to_string())),
        Answer(Some(text)) => answer_handler(world, view, &text)?,
        Answer(None) => view.push(ViewItem::EngineMessage("Answer what?".to_string())),
        Save(file) => save_handler(world, view, file.as_deref()),
        Load(file) => load_handler(world, view, file.as_deref())?,
        Unknown => view.push(ViewItem::Error(
            "I don't understand that command. Type 'help' for a list of commands.".to_string(),
        )),
    }
    Ok(())
}
