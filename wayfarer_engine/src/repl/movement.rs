//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location.

use crate::condition::check_endgame;
use crate::room::normalize_direction;
use crate::view::{View, ViewItem};
use crate::world::{ItemHolder, World};

use anyhow::Result;
use log::{info, warn};

/// Move the player through an exit of the current room.
///
/// Locked exits open themselves when the player carries the matching key
/// (the key is kept); otherwise the move fails with a message naming the
/// key. A successful move re-describes the destination and re-runs the
/// win/lose check.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn move_to_handler(world: &mut World, view: &mut View, input_dir: &str) -> Result<()> {
    let direction = normalize_direction(input_dir);
    let room_id = world.player.current_room.clone();

    let exit_info = world
        .player_room_ref()?
        .exits
        .get(&direction)
        .map(|exit| (exit.to.clone(), exit.locked, exit.key.clone()));
    let Some((destination, locked, key)) = exit_info else {
        view.push(ViewItem::ActionFailure("You can't go that way.".to_string()));
        return Ok(());
    };

    if locked {
        let matching_key = key
            .as_deref()
            .filter(|wanted| world.player.contains_item(wanted))
            .map(str::to_string);
        if let Some(key_name) = matching_key {
            if let Some(exit) = world.player_room_mut()?.exits.get_mut(&direction) {
                exit.locked = false;
            }
            view.push(ViewItem::ActionSuccess(format!(
                "You use the {key_name} to unlock the way {direction}."
            )));
            world.player.record_task(format!("Unlocked the {direction} exit from {room_id}"));
            info!("player unlocked the {direction} exit from {room_id}");
        } else {
            let message = match key {
                Some(key_name) => format!("The way {direction} is locked. It needs the {key_name}."),
                None => format!("The way {direction} is locked, and there's no keyhole in sight."),
            };
            view.push(ViewItem::ActionFailure(message));
            info!("player tried the locked {direction} exit from {room_id}");
            return Ok(());
        }
    }

    if !world.rooms.contains_key(&destination) {
        warn!("exit {direction} from {room_id} leads to undefined room '{destination}'");
        view.push(ViewItem::ActionFailure("The exit seems to lead nowhere.".to_string()));
        return Ok(());
    }

    world.player.current_room = destination;
    info!("player moved {direction} from {room_id} to {}", world.player.current_room);
    world.player_room_ref()?.show(view);
    check_endgame(world, view);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::room::{Exit, Room};
    use crate::world::{Metadata, QuestLog};
    use std::collections::HashMap;

    fn keyed_world() -> World {
        let mut hall = Room::new("Hall", "A hall.");
        hall.exits.insert("north".to_string(), Exit::locked("Vault", "Iron_Key"));
        hall.exits.insert("south".to_string(), Exit::new("Garden"));
        hall.exits.insert("east".to_string(), Exit::new("Nowhere At All"));
        let vault = Room::new("Vault", "Shiny.");
        let garden = Room::new("Garden", "Green.");

        let mut rooms = HashMap::new();
        rooms.insert("Hall".to_string(), hall);
        rooms.insert("Vault".to_string(), vault);
        rooms.insert("Garden".to_string(), garden);
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
    fn unknown_direction_leaves_state_unchanged() {
        let mut world = keyed_world();
        let mut view = View::new();
        world.player.add_item("map".to_string());
        move_to_handler(&mut world, &mut view, "west").unwrap();
        assert_eq!(world.player.current_room, "Hall");
        assert_eq!(world.player.inventory, vec!["map".to_string()]);
        assert!(matches!(&view.items[0], ViewItem::ActionFailure(msg) if msg.contains("can't go")));
    }

    #[test]
    fn locked_exit_without_key_blocks_and_names_the_key() {
        let mut world = keyed_world();
        let mut view = View::new();
        move_to_handler(&mut world, &mut view, "north").unwrap();
        assert_eq!(world.player.current_room, "Hall");
        assert!(world.rooms["Hall"].exits["north"].locked);
        assert!(matches!(&view.items[0], ViewItem::ActionFailure(msg) if msg.contains("Iron_Key")));
    }

    #[test]
    fn locked_exit_opens_with_carried_key_and_stays_open() {
        let mut world = keyed_world();
        let mut view = View::new();
        world.player.add_item("iron_key".to_string());

        move_to_handler(&mut world, &mut view, "n").unwrap();
        assert_eq!(world.player.current_room, "Vault");
        // key is used, not consumed
        assert!(world.player.contains_item("iron_key"));
        assert!(!world.rooms["Hall"].exits["north"].locked);
        assert!(world.player.completed_tasks.iter().any(|t| t.contains("north")));

        // walk back and through again: never reports locked a second time
        world.player.current_room = "Hall".to_string();
        let mut second = View::new();
        move_to_handler(&mut world, &mut second, "north").unwrap();
        assert_eq!(world.player.current_room, "Vault");
        assert!(
            !second
                .items
                .iter()
                .any(|item| matches!(item, ViewItem::ActionFailure(msg) if msg.contains("locked")))
        );
    }

    #[test]
    fn dangling_exit_reports_and_stays_put() {
        let mut world = keyed_world();
        let mut view = View::new();
        move_to_handler(&mut world, &mut view, "east").unwrap();
        assert_eq!(world.player.current_room, "Hall");
        assert!(matches!(&view.items[0], ViewItem::ActionFailure(msg) if msg.contains("nowhere")));
    }

    #[test]
    fn successful_move_redescribes_the_room() {
        let mut world = keyed_world();
        let mut view = View::new();
        move_to_handler(&mut world, &mut view, "south").unwrap();
        assert_eq!(world.player.current_room, "Garden");
        assert!(matches!(&view.items[0], ViewItem::RoomHeading(name) if name == "Garden"));
    }
}
