//! `repl::system` module
//!
//! Contains repl loop handlers for system utilities: help, quitting,
//! the task board, and save/load.

use std::path::Path;

use crate::condition::check_endgame;
use crate::save_files::{DEFAULT_SAVE_FILE, SaveError, read_save, write_save};
use crate::view::{View, ViewItem};
use crate::world::World;

use anyhow::Result;
use log::{info, warn};

/// Quit the game with an orderly goodbye.
pub fn quit_handler(world: &mut World, view: &mut View) {
    info!("player quit in room '{}'", world.player.current_room);
    view.push(ViewItem::EngineMessage("Goodbye.".to_string()));
    world.player.running = false;
}

/// Show available commands.
pub fn help_handler(view: &mut View) {
    view.push(ViewItem::Help);
}

/// Show the quest log, the current room's tasks, and everything completed.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn tasks_handler(world: &World, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    view.push(ViewItem::TaskBoard {
        main_quest: world.quests.main_quest.clone(),
        side_quests: world.quests.side_quests.clone(),
        room_tasks: room.tasks.clone(),
        completed: world.player.completed_tasks.clone(),
    });
    Ok(())
}

/// Save the player snapshot to a JSON file (default `save.json`).
///
/// Failures are reported to the player and recovered locally.
pub fn save_handler(world: &World, view: &mut View, filename: Option<&str>) {
    let file = filename.unwrap_or(DEFAULT_SAVE_FILE);
    match write_save(Path::new(file), &world.player) {
        Ok(()) => {
            info!("player saved game to '{file}'");
            view.push(ViewItem::EngineMessage(format!("Game saved to '{file}'.")));
        },
        Err(err) => {
            warn!("save to '{file}' failed: {err:#}");
            view.push(ViewItem::Error(format!("Error saving game: {err}")));
        },
    }
}

/// Restore a previously saved player snapshot.
///
/// A missing or unreadable save reports one diagnostic and leaves the
/// current state untouched. A successful load replaces the persisted
/// fields wholesale, re-describes the room, and re-runs the win/lose
/// check.
///
/// # Errors
/// Returns an error if, after a successful restore, the player's room
/// cannot be resolved -- which the unknown-room guard rules out.
pub fn load_handler(world: &mut World, view: &mut View, filename: Option<&str>) -> Result<()> {
    let file = filename.unwrap_or(DEFAULT_SAVE_FILE);
    let data = match read_save(Path::new(file)) {
        Ok(data) => data,
        Err(err) => {
            warn!("load from '{file}' failed: {err}");
            let message = match err {
                SaveError::Missing(_) => format!("No save file found at '{file}'."),
                SaveError::Corrupted => "Save file is corrupted.".to_string(),
                other => format!("Error loading save: {other}"),
            };
            view.push(ViewItem::Error(message));
            return Ok(());
        },
    };

    if !world.rooms.contains_key(&data.current) {
        let err = SaveError::UnknownRoom(data.current.clone());
        warn!("load from '{file}' rejected: {err}");
        view.push(ViewItem::Error(format!("{err}. Load aborted.")));
        return Ok(());
    }

    data.apply(&mut world.player);
    info!("player loaded game from '{file}'");
    view.push(ViewItem::EngineMessage(format!("Game loaded from '{file}'.")));
    world.player_room_ref()?.show(view);
    check_endgame(world, view);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::room::Room;
    use crate::world::{ItemHolder, Metadata, QuestLog};
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn quest_world() -> World {
        let mut hall = Room::new("Hall", "A hall.");
        hall.tasks.push("Get your bearings.".to_string());
        let garden = Room::new("Garden", "Green.");
        let mut rooms = HashMap::new();
        rooms.insert("Hall".to_string(), hall);
        rooms.insert("Garden".to_string(), garden);
        World {
            rooms,
            start: "Hall".to_string(),
            win_condition: None,
            lose_condition: None,
            metadata: Metadata::default(),
            quests: QuestLog {
                main_quest: Some("Find the treasure.".to_string()),
                side_quests: vec!["Smell the flowers.".to_string()],
            },
            player: Player::new("Hall"),
        }
    }

    #[test]
    fn quit_clears_running_and_says_goodbye() {
        let mut world = quest_world();
        let mut view = View::new();
        quit_handler(&mut world, &mut view);
        assert!(!world.player.running);
        assert!(matches!(&view.items[0], ViewItem::EngineMessage(msg) if msg == "Goodbye."));
    }

    #[test]
    fn tasks_board_combines_world_room_and_player_entries() {
        let mut world = quest_world();
        world.player.record_task("Solved the riddle in Garden");
        let mut view = View::new();
        tasks_handler(&world, &mut view).unwrap();
        match &view.items[0] {
            ViewItem::TaskBoard {
                main_quest,
                side_quests,
                room_tasks,
                completed,
            } => {
                assert_eq!(main_quest.as_deref(), Some("Find the treasure."));
                assert_eq!(side_quests.len(), 1);
                assert_eq!(room_tasks, &vec!["Get your bearings.".to_string()]);
                assert_eq!(completed, &vec!["Solved the riddle in Garden".to_string()]);
            },
            other => panic!("expected TaskBoard, got {other:?}"),
        }
    }

    #[test]
    fn save_then_load_round_trips_player_state() {
        let dir = tempdir().unwrap();
        let slot = dir.path().join("slot.json");
        let slot_str = slot.to_str().unwrap();

        let mut world = quest_world();
        world.player.add_item("map".to_string());
        world.player.current_room = "Garden".to_string();
        world.player.hints_given = 3;
        let mut view = View::new();
        save_handler(&world, &mut view, Some(slot_str));
        assert!(matches!(&view.items[0], ViewItem::EngineMessage(msg) if msg.contains("saved")));

        // wander off, then restore
        world.player.current_room = "Hall".to_string();
        world.player.inventory.clear();
        world.player.hints_given = 0;
        let mut load_view = View::new();
        load_handler(&mut world, &mut load_view, Some(slot_str)).unwrap();
        assert_eq!(world.player.current_room, "Garden");
        assert_eq!(world.player.inventory, vec!["map".to_string()]);
        assert_eq!(world.player.hints_given, 3);
        assert!(matches!(&load_view.items[0], ViewItem::EngineMessage(msg) if msg.contains("loaded")));
        // load re-describes the restored room
        assert!(load_view.items.iter().any(|item| matches!(item, ViewItem::RoomHeading(name) if name == "Garden")));
    }

    #[test]
    fn load_missing_file_reports_and_keeps_state() {
        let dir = tempdir().unwrap();
        let slot = dir.path().join("absent.json");
        let mut world = quest_world();
        world.player.add_item("map".to_string());
        let mut view = View::new();
        load_handler(&mut world, &mut view, Some(slot.to_str().unwrap())).unwrap();
        assert_eq!(world.player.inventory, vec!["map".to_string()]);
        assert_eq!(world.player.current_room, "Hall");
        assert!(matches!(&view.items[0], ViewItem::Error(msg) if msg.contains("No save file")));
    }

    #[test]
    fn load_corrupt_file_reports_and_keeps_state() {
        let dir = tempdir().unwrap();
        let slot = dir.path().join("bad.json");
        std::fs::write(&slot, "{ not json").unwrap();
        let mut world = quest_world();
        let mut view = View::new();
        load_handler(&mut world, &mut view, Some(slot.to_str().unwrap())).unwrap();
        assert_eq!(world.player.current_room, "Hall");
        assert!(matches!(&view.items[0], ViewItem::Error(msg) if msg.contains("corrupted")));
    }

    #[test]
    fn load_rejects_saves_naming_unknown_rooms() {
        let dir = tempdir().unwrap();
        let slot = dir.path().join("elsewhere.json");
        std::fs::write(
            &slot,
            r#"{"current": "Moon Base", "inventory": [], "npc_progress": {},
                "completed_tasks": [], "riddles_solved": {}, "hints_given": 0}"#,
        )
        .unwrap();
        let mut world = quest_world();
        let mut view = View::new();
        load_handler(&mut world, &mut view, Some(slot.to_str().unwrap())).unwrap();
        assert_eq!(world.player.current_room, "Hall");
        assert!(matches!(&view.items[0], ViewItem::Error(msg) if msg.contains("Moon Base")));
    }
}
