//! Loader utilities for building a [`World`] from a world document.
//!
//! World content is read from a JSON document, validated, and assembled
//! into the runtime room arena. A missing file is not an error: the caller
//! supplies a fallback provider for a playable default world.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;

use crate::condition::Condition;
use crate::npc::Npc;
use crate::player::Player;
use crate::room::{Exit, Riddle, Room};
use crate::world::{Metadata, QuestLog, World};
use wayfarer_data::{WorldDoc, validate_world};

/// World file consulted when no path is given on the command line.
pub const DEFAULT_WORLD_FILE: &str = "game_map.json";

/// Load the world from `path`, or from the fallback provider when the file
/// does not exist.
///
/// # Errors
/// Errors bubble up from file IO, JSON parsing, or document validation --
/// all structural failures that should stop the process before play.
pub fn load_world<F>(path: &Path, fallback: F) -> Result<World>
where
    F: FnOnce() -> WorldDoc,
{
    let doc = if path.exists() {
        read_world_doc(path)?
    } else {
        info!("no world file at {}; using the built-in default world", path.display());
        fallback()
    };
    build_world(doc)
}

/// Read and parse a world document from disk.
///
/// # Errors
/// - if the file cannot be read or is not valid JSON
pub fn read_world_doc(path: &Path) -> Result<WorldDoc> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading world file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing world file {}", path.display()))
}

/// Validate a world document and assemble the runtime [`World`].
///
/// Exit directions are lowercased here so that normalized player input
/// matches them directly.
///
/// # Errors
/// - if validation reports any structural problem
pub fn build_world(doc: WorldDoc) -> Result<World> {
    validate_doc(&doc)?;

    let mut rooms: HashMap<String, Room> = HashMap::new();
    for (room_id, def) in &doc.rooms {
        let mut room = Room::new(room_id.clone(), def.description.clone());
        room.items = def.items.clone();
        room.tasks = def.tasks.clone();
        for (direction, exit) in &def.exits {
            room.exits.insert(
                direction.to_lowercase(),
                Exit {
                    to: exit.to.clone(),
                    locked: exit.locked,
                    key: exit.key.clone(),
                },
            );
        }
        for (npc_id, npc) in &def.npcs {
            room.npcs.insert(
                npc_id.clone(),
                Npc {
                    name: npc.name.clone(),
                    dialogue: npc.dialogue.clone(),
                },
            );
        }
        if let Some(riddle) = &def.riddle {
            room.riddle = Some(Riddle {
                question: riddle.question.clone(),
                answer: riddle.answer.clone(),
                reward: riddle.reward.clone(),
                solved: riddle.solved,
            });
        }
        rooms.insert(room_id.clone(), room);
    }
    info!("{} rooms added to world", rooms.len());

    let quests = doc
        .tasks
        .map(|tasks| QuestLog {
            main_quest: tasks.main_quest,
            side_quests: tasks.side_quests,
        })
        .unwrap_or_default();

    let player = Player::new(&doc.start);
    Ok(World {
        rooms,
        start: doc.start,
        win_condition: doc.win_condition.as_ref().map(Condition::from_def),
        lose_condition: doc.lose_condition.as_ref().map(Condition::from_def),
        metadata: Metadata {
            title: doc.metadata.title,
            author: doc.metadata.author,
            description: doc.metadata.description,
        },
        quests,
        player,
    })
}

/// Validate the document and return a single aggregated error.
fn validate_doc(doc: &WorldDoc) -> Result<()> {
    let errors = validate_world(doc);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("world document validation failed:\n{details}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_world;

    #[test]
    fn sample_world_builds_cleanly() {
        let world = build_world(sample_world()).expect("sample world should validate");
        assert_eq!(world.player.current_room, world.start);
        assert!(world.rooms.contains_key(&world.start));
        assert!(world.win_condition.is_some());
    }

    #[test]
    fn exit_directions_are_lowercased_at_build_time() {
        let mut doc = sample_world();
        let hall = doc.rooms.get_mut("Hall").unwrap();
        let east = hall.exits.remove("east").unwrap();
        hall.exits.insert("East".to_string(), east);
        let world = build_world(doc).unwrap();
        assert!(world.rooms["Hall"].exits.contains_key("east"));
    }

    #[test]
    fn invalid_start_room_fails_with_aggregated_details() {
        let mut doc = sample_world();
        doc.start = "Attic".to_string();
        let err = build_world(doc).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn missing_file_uses_fallback_provider() {
        let world = load_world(Path::new("definitely/not/here.json"), sample_world).unwrap();
        assert_eq!(world.start, "Hall");
    }
}
