//! Data structures representing the game world.
//!
//! This module defines [`World`] and related types used at runtime to track
//! the current state of the adventure. The room arena is the single owner
//! of all room data; everything else refers to rooms by identifier.

use std::collections::HashMap;

use anyhow::{Result, anyhow};

use crate::condition::Condition;
use crate::player::Player;
use crate::room::Room;

/// Methods common to anything that can hold items (rooms, the player).
/// Lookups are by case-insensitive exact identifier match; the stored
/// spelling is preserved when an item changes hands.
pub trait ItemHolder {
    fn add_item(&mut self, item: String);
    fn remove_item(&mut self, name: &str) -> Option<String>;
    fn contains_item(&self, name: &str) -> bool;
}

impl ItemHolder for Room {
    fn add_item(&mut self, item: String) {
        self.items.push(item);
    }

    fn remove_item(&mut self, name: &str) -> Option<String> {
        let idx = self.items.iter().position(|held| held.eq_ignore_ascii_case(name))?;
        Some(self.items.remove(idx))
    }

    fn contains_item(&self, name: &str) -> bool {
        self.items.iter().any(|held| held.eq_ignore_ascii_case(name))
    }
}

/// Display-only world metadata shown at session start.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub title: String,
    pub author: String,
    pub description: String,
}

/// Display-only quest summary for the `tasks` command.
#[derive(Debug, Clone, Default)]
pub struct QuestLog {
    pub main_quest: Option<String>,
    pub side_quests: Vec<String>,
}

/// Complete state of the running game.
///
/// `World` contains the room arena, the win/lose conditions, and the player
/// character. It is created during loading and then mutated only through
/// the REPL action handlers.
#[derive(Debug, Clone)]
pub struct World {
    pub rooms: HashMap<String, Room>,
    pub start: String,
    pub win_condition: Option<Condition>,
    pub lose_condition: Option<Condition>,
    pub metadata: Metadata,
    pub quests: QuestLog,
    pub player: Player,
}

impl World {
    /// Obtain a reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's current room id is not found in the arena
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(&self.player.current_room)
            .ok_or_else(|| anyhow!("player's room '{}' not found in world", self.player.current_room))
    }

    /// Obtain a mutable reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's current room id is not found in the arena
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        self.rooms
            .get_mut(&self.player.current_room)
            .ok_or_else(|| anyhow!("player's room '{}' not found in world", self.player.current_room))
    }
}

/// Find an exact, case-insensitive match in a pool of identifiers and
/// return the stored spelling.
pub fn find_case_insensitive<'a, I>(target: &str, pool: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    pool.into_iter()
        .find(|entry| entry.eq_ignore_ascii_case(target))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;

    fn two_room_world() -> World {
        let mut rooms = HashMap::new();
        rooms.insert("Hall".to_string(), Room::new("Hall", "A hall."));
        rooms.insert("Garden".to_string(), Room::new("Garden", "A garden."));
        World {
            rooms,
            start: "Hall".to_string(),
            win_condition: None,
            lose_condition: None,
            metadata: Metadata::default(),
            quests: QuestLog::default(),
            player: Player::new("Hall"),
        }
    }

    #[test]
    fn player_room_ref_resolves_current_room() {
        let world = two_room_world();
        assert_eq!(world.player_room_ref().unwrap().id, "Hall");
    }

    #[test]
    fn player_room_ref_errors_on_unknown_room() {
        let mut world = two_room_world();
        world.player.current_room = "Oubliette".to_string();
        assert!(world.player_room_ref().is_err());
    }

    #[test]
    fn player_room_mut_allows_in_place_mutation() {
        let mut world = two_room_world();
        world.player_room_mut().unwrap().items.push("map".to_string());
        assert_eq!(world.rooms["Hall"].items, vec!["map".to_string()]);
    }

    #[test]
    fn find_case_insensitive_returns_stored_spelling() {
        let pool = vec!["Silver_Key".to_string(), "map".to_string()];
        assert_eq!(find_case_insensitive("silver_key", &pool), Some("Silver_Key"));
        assert_eq!(find_case_insensitive("torch", &pool), None);
    }

    #[test]
    fn room_item_holder_moves_preserve_spelling() {
        let mut room = Room::new("Hall", "A hall.");
        room.items.push("Brass_Lamp".to_string());
        let taken = room.remove_item("brass_lamp").unwrap();
        assert_eq!(taken, "Brass_Lamp");
        assert!(!room.contains_item("brass_lamp"));
        room.add_item(taken);
        assert!(room.contains_item("BRASS_LAMP"));
    }
}
