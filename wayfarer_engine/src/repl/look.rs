//! `repl::look` module
//!
//! Read-only handlers for observing the room and inventory. Neither runs
//! the win/lose check.

use crate::view::{View, ViewItem};
use crate::world::World;

use anyhow::Result;
use log::info;

/// Describe the current room, its items, people, and exits.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_handler(world: &World, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    room.show(view);
    info!("player looked around {}", room.id);
    Ok(())
}

/// Show the inventory in acquisition order.
pub fn inventory_handler(world: &World, view: &mut View) {
    view.push(ViewItem::Inventory(world.player.inventory.clone()));
}
