//! View module.
//!
//! Rather than printing to the console from each handler, messages are
//! aggregated here during a turn and displayed together by [`View::flush`].
//! The buffered [`ViewItem`] sequence is the engine's real output; printing
//! it is just presentation.

use colored::Colorize;
use textwrap::{fill, termwidth};

use crate::style::GameStyle;

const HELP_TEXT: &str = "\
  look or l                   - Describe the current room
  go <direction>              - Move (north, south, east, west, ...)
  <direction>                 - Shortcut to move (north, n, south, s, ...)
  take <item>                 - Pick up an item
  drop <item>                 - Drop an item
  inventory or i              - Show your inventory
  use <item> [on <direction>] - Use an item (e.g. use silver_key on north)
  talk to <npc>               - Talk to someone in the room
  examine <item>              - Take a closer look at an item
  answer <text>               - Answer the riddle in this room
  tasks                       - Show quests and completed tasks
  hint                        - Ask for a nudge
  save [filename]             - Save your game (default: save.json)
  load [filename]             - Load a saved game (default: save.json)
  quit / exit                 - Leave the game
  help or ?                   - Show this help";

/// One line in the exit listing for a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitLine {
    pub direction: String,
    pub locked: bool,
}

/// One displayable event produced by an engine action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    RoomHeading(String),
    Description(String),
    ItemList(Vec<String>),
    NpcList(Vec<String>),
    ExitList(Vec<ExitLine>),
    Inventory(Vec<String>),
    Speech { speaker: String, line: String },
    ActionSuccess(String),
    ActionFailure(String),
    EngineMessage(String),
    TaskBoard {
        main_quest: Option<String>,
        side_quests: Vec<String>,
        room_tasks: Vec<String>,
        completed: Vec<String>,
    },
    Help,
    GameWon,
    GameLost,
    Error(String),
}

/// Aggregates the messages emitted during one pass through the REPL loop
/// and renders them in order when flushed.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub items: Vec<ViewItem>,
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Queue an item for the current turn.
    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Render and clear everything queued this turn.
    pub fn flush(&mut self) {
        let width = termwidth().min(88);
        for item in self.items.drain(..) {
            render(&item, width);
        }
    }
}

fn render(item: &ViewItem, width: usize) {
    match item {
        ViewItem::RoomHeading(name) => {
            println!("\n== {} ==", name.room_style());
        },
        ViewItem::Description(text) => {
            println!("{}", fill(text, width).description_style());
        },
        ViewItem::ItemList(items) => {
            let listed: Vec<String> = items.iter().map(|i| i.item_style().to_string()).collect();
            println!("You see: {}", listed.join(", "));
        },
        ViewItem::NpcList(names) => {
            let listed: Vec<String> = names.iter().map(|n| n.npc_style().to_string()).collect();
            println!("People here: {}", listed.join(", "));
        },
        ViewItem::ExitList(exits) => {
            let listed: Vec<String> = exits
                .iter()
                .map(|exit| {
                    if exit.locked {
                        format!("{} {}", exit.direction.exit_style(), "(locked)".exit_locked_style())
                    } else {
                        exit.direction.exit_style().to_string()
                    }
                })
                .collect();
            println!("Exits: {}", listed.join(", "));
        },
        ViewItem::Inventory(items) => {
            if items.is_empty() {
                println!("You are not carrying anything.");
            } else {
                let listed: Vec<String> = items.iter().map(|i| i.item_style().to_string()).collect();
                println!("You are carrying: {}", listed.join(", "));
            }
        },
        ViewItem::Speech { speaker, line } => {
            println!("{} says: \"{}\"", speaker.npc_style(), line.speech_style());
        },
        ViewItem::ActionSuccess(msg) | ViewItem::EngineMessage(msg) => {
            println!("{msg}");
        },
        ViewItem::ActionFailure(msg) => {
            println!("{}", msg.denied_style());
        },
        ViewItem::TaskBoard {
            main_quest,
            side_quests,
            room_tasks,
            completed,
        } => render_task_board(main_quest.as_deref(), side_quests, room_tasks, completed),
        ViewItem::Help => {
            println!("{}", "Commands".subheading_style());
            println!("{HELP_TEXT}");
        },
        ViewItem::GameWon => {
            println!("\n{}", "CONGRATULATIONS! You've met the win condition.".victory_style());
        },
        ViewItem::GameLost => {
            println!("\n{}", "You have met a lose condition. Game over.".defeat_style());
        },
        ViewItem::Error(msg) => {
            println!("{}", msg.error_style());
        },
    }
}

fn render_task_board(main_quest: Option<&str>, side_quests: &[String], room_tasks: &[String], completed: &[String]) {
    if let Some(quest) = main_quest {
        println!("{}: {}", "Main quest".subheading_style(), quest);
    }
    if !side_quests.is_empty() {
        println!("{}", "Side quests".subheading_style());
        for quest in side_quests {
            println!("  - {quest}");
        }
    }
    if !room_tasks.is_empty() {
        println!("{}", "In this room".subheading_style());
        for task in room_tasks {
            println!("  - {task}");
        }
    }
    if completed.is_empty() {
        println!("{}", "Nothing completed yet.".italic());
    } else {
        println!("{}", "Completed".subheading_style());
        for entry in completed {
            println!("  - {}", entry.task_done_style());
        }
    }
}
