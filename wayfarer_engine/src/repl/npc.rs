//! `repl::npc` module
//!
//! Contains the repl loop handler for talking to NPCs.

use crate::npc::progress_key;
use crate::view::{View, ViewItem};
use crate::world::World;

use anyhow::Result;
use log::info;

/// Talk to an NPC in the current room, matched case-insensitively by map
/// key or display name.
///
/// Dialogue advances one line per conversation and parks on the final line
/// forever; progress is scoped to the (room, NPC) pair.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn talk_handler(world: &mut World, view: &mut View, query: &str) -> Result<()> {
    let found = {
        let room = world.player_room_ref()?;
        let Some((npc_id, npc)) = room.npcs.iter().find(|(key, npc)| npc.matches(key, query)) else {
            view.push(ViewItem::ActionFailure("There's no one here by that name.".to_string()));
            return Ok(());
        };
        if npc.dialogue.is_empty() {
            view.push(ViewItem::EngineMessage(format!("{} has nothing to say.", npc.name)));
            return Ok(());
        }
        (progress_key(&room.id, npc_id), npc.name.clone(), npc.dialogue.clone())
    };

    let (key, speaker, dialogue) = found;
    let idx = world.player.advance_dialogue(&key, dialogue.len());
    info!("player talked to {speaker} ({key}), line {idx}");
    view.push(ViewItem::Speech {
        speaker,
        line: dialogue[idx].clone(),
    });
    Ok(())
}
