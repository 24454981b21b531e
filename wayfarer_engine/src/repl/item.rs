//! `repl::item` module
//!
//! Contains repl loop handlers for commands that move or inspect items.

use crate::condition::check_endgame;
use crate::room::normalize_direction;
use crate::view::{View, ViewItem};
use crate::world::{ItemHolder, World, find_case_insensitive};

use anyhow::Result;
use log::info;

/// Flavor descriptions for examined inventory items. Anything not listed
/// falls back to a generic line.
const FLAVOR_TEXT: &[(&str, &str)] = &[
    ("map", "Hand-drawn and smudged. Someone has circled a room marked with an X."),
    ("knife", "A kitchen knife. Keen enough, though it has clearly seen more carrots than combat."),
    ("silver_key", "Small and cold, with an ornate bow. It looks like it matters."),
    ("flower", "Still fresh. It smells faintly of summer."),
    ("treasure", "Gold, gems, and no small amount of dust. Heavier than it looks."),
    ("golden_coin", "An old coin stamped with a face nobody remembers."),
];

/// Pick up a case-insensitively matched item from the current room.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn take_handler(world: &mut World, view: &mut View, item_name: &str) -> Result<()> {
    let taken = world.player_room_mut()?.remove_item(item_name);
    if let Some(found) = taken {
        view.push(ViewItem::ActionSuccess(format!("You take the {found}.")));
        info!("player took '{found}' in {}", world.player.current_room);
        world.player.add_item(found);
        check_endgame(world, view);
    } else {
        view.push(ViewItem::ActionFailure(format!("There is no '{item_name}' here.")));
    }
    Ok(())
}

/// Drop a held item into the current room.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn drop_handler(world: &mut World, view: &mut View, item_name: &str) -> Result<()> {
    if let Some(found) = world.player.remove_item(item_name) {
        view.push(ViewItem::ActionSuccess(format!("You drop the {found}.")));
        info!("player dropped '{found}' in {}", world.player.current_room);
        world.player_room_mut()?.add_item(found);
    } else {
        view.push(ViewItem::ActionFailure(format!("You don't have '{item_name}'.")));
    }
    Ok(())
}

/// Use a held item, optionally on an exit direction (`use key on north`).
///
/// Using an item on a locked exit compares it against the exit's key; using
/// it with no target is a deliberate no-op.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn use_handler(world: &mut World, view: &mut View, arg: &str) -> Result<()> {
    let (item_name, target) = split_use_argument(arg);
    let Some(found) = find_case_insensitive(&item_name, &world.player.inventory).map(str::to_string) else {
        view.push(ViewItem::ActionFailure(format!("You don't have '{item_name}'.")));
        return Ok(());
    };

    let Some(target) = target else {
        view.push(ViewItem::EngineMessage(format!(
            "You use the {found}, but nothing obvious happens."
        )));
        return Ok(());
    };

    let direction = normalize_direction(&target);
    let room_id = world.player.current_room.clone();
    let unlocked = {
        let room = world.player_room_mut()?;
        match room.exits.get_mut(&direction) {
            None => {
                view.push(ViewItem::ActionFailure("There's no exit in that direction.".to_string()));
                return Ok(());
            },
            Some(exit) if !exit.locked => {
                view.push(ViewItem::EngineMessage("That way is already unlocked.".to_string()));
                return Ok(());
            },
            Some(exit) => {
                let fits = exit.key.as_deref().is_some_and(|key| key.eq_ignore_ascii_case(&found));
                if fits {
                    exit.locked = false;
                }
                fits
            },
        }
    };

    if unlocked {
        view.push(ViewItem::ActionSuccess(format!(
            "You used the {found} to unlock the way {direction}."
        )));
        world.player.record_task(format!("Unlocked the {direction} exit from {room_id}"));
        info!("player unlocked the {direction} exit from {room_id} with '{found}'");
    } else {
        view.push(ViewItem::ActionFailure("That key doesn't fit this lock.".to_string()));
    }
    Ok(())
}

/// Examine an item in inventory (flavor text) or the current room.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn examine_handler(world: &World, view: &mut View, item_name: &str) -> Result<()> {
    if let Some(found) = find_case_insensitive(item_name, &world.player.inventory) {
        let description = flavor_text(found).map_or_else(
            || format!("You turn the {found} over in your hands. Nothing out of the ordinary."),
            str::to_string,
        );
        view.push(ViewItem::Description(description));
        return Ok(());
    }
    let room = world.player_room_ref()?;
    if let Some(found) = find_case_insensitive(item_name, &room.items) {
        view.push(ViewItem::EngineMessage(format!(
            "The {found} looks like something you could take."
        )));
    } else {
        view.push(ViewItem::ActionFailure(format!("You see no '{item_name}' here.")));
    }
    Ok(())
}

/// Split a `use` argument into the item and an optional target, honoring an
/// `on` separator: `silver_key on north` and `silver_key north` both work.
fn split_use_argument(arg: &str) -> (String, Option<String>) {
    let tokens: Vec<&str> = arg.split_whitespace().collect();
    let (item_tokens, target_tokens) = if let Some(idx) = tokens.iter().position(|t| *t == "on") {
        (&tokens[..idx], &tokens[idx + 1..])
    } else {
        (&tokens[..tokens.len().min(1)], &tokens[tokens.len().min(1)..])
    };
    let item = item_tokens.join(" ");
    let target = target_tokens.join(" ");
    (item, (!target.is_empty()).then_some(target))
}

fn flavor_text(item: &str) -> Option<&'static str> {
    FLAVOR_TEXT
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(item))
        .map(|(_, text)| *text)
}
