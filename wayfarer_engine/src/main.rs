#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Wayfarer **
//! Text-adventure runtime: load a world document, drop the player in the
//! start room, and run the REPL until a win, a loss, or a goodbye.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use wayfarer_engine::loader::{DEFAULT_WORLD_FILE, load_world};
use wayfarer_engine::repl::look_handler;
use wayfarer_engine::sample::sample_world;
use wayfarer_engine::style::GameStyle;
use wayfarer_engine::{View, run_repl};

fn main() -> Result<()> {
    env_logger::init();

    let world_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_WORLD_FILE), PathBuf::from);
    info!("Start: loading world from {}", world_path.display());
    let mut world = load_world(&world_path, sample_world).context("while loading the world")?;
    info!("world loaded successfully");

    let title = if world.metadata.title.is_empty() {
        "Text Adventure"
    } else {
        world.metadata.title.as_str()
    };
    println!("\n{}", title.bold().underline());
    if !world.metadata.author.is_empty() {
        println!("by {}", world.metadata.author);
    }
    if !world.metadata.description.is_empty() {
        println!("{}", world.metadata.description.description_style());
    }
    println!("Type 'help' for commands.");

    let mut view = View::new();
    look_handler(&world, &mut view)?;
    view.flush();

    run_repl(&mut world)
}
