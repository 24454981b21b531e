//! Room definitions and spatial utilities.
//!
//! Every location the player can inhabit is a [`Room`] in the world arena.
//! Rooms own their exits, resident NPCs, loose items, and an optional
//! riddle, and are mutated in place as the game progresses.

use std::collections::HashMap;

use crate::npc::Npc;
use crate::view::{ExitLine, View, ViewItem};

/// An exit from one room to another.
///
/// A locked exit still names a real destination; traversal is gated on a
/// key item until the lock is opened, after which it stays open.
#[derive(Debug, Clone)]
pub struct Exit {
    pub to: String,
    pub locked: bool,
    pub key: Option<String>,
}

impl Exit {
    /// Create a basic unlocked exit leading to the room with the given id.
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            locked: false,
            key: None,
        }
    }

    /// Create a locked exit requiring the given key item.
    pub fn locked(to: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            locked: true,
            key: Some(key.into()),
        }
    }
}

/// A room-bound riddle. The solved flag is set once and never reset.
#[derive(Debug, Clone)]
pub struct Riddle {
    pub question: String,
    pub answer: String,
    pub reward: Option<String>,
    pub solved: bool,
}

impl Riddle {
    /// Check a guess against the expected answer, ignoring case and
    /// surrounding whitespace.
    pub fn accepts(&self, guess: &str) -> bool {
        guess.trim().eq_ignore_ascii_case(self.answer.trim())
    }
}

/// A node in the world graph.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub description: String,
    pub items: Vec<String>,
    pub exits: HashMap<String, Exit>,
    pub npcs: HashMap<String, Npc>,
    pub riddle: Option<Riddle>,
    pub tasks: Vec<String>,
}

impl Room {
    /// Create an empty room with the given id and description.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            items: Vec::new(),
            exits: HashMap::new(),
            npcs: HashMap::new(),
            riddle: None,
            tasks: Vec::new(),
        }
    }

    /// Push the full room description into the view: heading, description,
    /// visible items, people, and exits (sorted for stable output).
    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::RoomHeading(self.id.clone()));
        view.push(ViewItem::Description(self.description.clone()));
        if !self.items.is_empty() {
            view.push(ViewItem::ItemList(self.items.clone()));
        }
        if !self.npcs.is_empty() {
            let mut names: Vec<String> = self.npcs.values().map(|npc| npc.name.clone()).collect();
            names.sort();
            view.push(ViewItem::NpcList(names));
        }
        if !self.exits.is_empty() {
            let mut exits: Vec<ExitLine> = self
                .exits
                .iter()
                .map(|(direction, exit)| ExitLine {
                    direction: direction.clone(),
                    locked: exit.locked,
                })
                .collect();
            exits.sort_by(|a, b| a.direction.cmp(&b.direction));
            view.push(ViewItem::ExitList(exits));
        }
    }

    /// True if the room has a riddle that hasn't been solved yet.
    pub fn has_unsolved_riddle(&self) -> bool {
        self.riddle.as_ref().is_some_and(|riddle| !riddle.solved)
    }
}

/// Expand single-letter and compass-corner direction shorthand.
/// Unknown tokens pass through unchanged (lowercased).
pub fn normalize_direction(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "n" => "north",
        "s" => "south",
        "e" => "east",
        "w" => "west",
        "u" => "up",
        "d" => "down",
        "ne" => "northeast",
        "nw" => "northwest",
        "se" => "southeast",
        "sw" => "southwest",
        _ => return lower,
    }
    .to_string()
}
