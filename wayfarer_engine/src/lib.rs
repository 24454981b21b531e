#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const WAYFARER_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod condition;
pub mod loader;
pub mod npc;
pub mod player;
pub mod repl;
pub mod room;
pub mod sample;
pub mod save_files;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use command::{Command, ParsedInput, parse_input, resolve_command};
pub use condition::{Condition, Predicate, check_endgame};
pub use loader::load_world;
pub use npc::Npc;
pub use player::Player;
pub use repl::{dispatch, run_repl};
pub use room::{Exit, Riddle, Room};
pub use view::{View, ViewItem};
pub use world::{ItemHolder, World};
