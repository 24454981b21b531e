//! `repl::riddle` module
//!
//! Contains repl loop handlers for riddle answers and hints.

use crate::condition::check_endgame;
use crate::view::{View, ViewItem};
use crate::world::{ItemHolder, World};

use anyhow::Result;
use log::info;

/// General-purpose hints served in rotation when the current room has no
/// open riddle to point at.
const HINTS: &[&str] = &[
    "Look everywhere. Rooms often hold more than their first description lets on.",
    "Locked doors want keys, and keys tend to be lying around somewhere nearby.",
    "People repeat themselves eventually, but they usually say something useful first.",
    "Riddle answers are plain words. Say them the simple way.",
];

enum RiddleOutcome {
    NoRiddle,
    AlreadySolved,
    Wrong,
    Solved { reward: Option<String> },
}

/// Try an answer against the current room's riddle.
///
/// Solving marks the room-owned flag (never reset), records the room as
/// riddle-solved, grants the reward at most once, and re-runs the win/lose
/// check. A solved riddle reports "already solved" no matter what is
/// answered afterwards.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn answer_handler(world: &mut World, view: &mut View, guess: &str) -> Result<()> {
    let room_id = world.player.current_room.clone();
    let outcome = {
        let room = world.player_room_mut()?;
        match room.riddle.as_mut() {
            None => RiddleOutcome::NoRiddle,
            Some(riddle) if riddle.solved => RiddleOutcome::AlreadySolved,
            Some(riddle) if riddle.accepts(guess) => {
                riddle.solved = true;
                RiddleOutcome::Solved {
                    reward: riddle.reward.clone(),
                }
            },
            Some(_) => RiddleOutcome::Wrong,
        }
    };

    match outcome {
        RiddleOutcome::NoRiddle => {
            view.push(ViewItem::ActionFailure("There's no riddle to answer here.".to_string()));
        },
        RiddleOutcome::AlreadySolved => {
            view.push(ViewItem::EngineMessage("That riddle is already solved.".to_string()));
        },
        RiddleOutcome::Wrong => {
            view.push(ViewItem::EngineMessage("That's not it. Think it over and try again.".to_string()));
        },
        RiddleOutcome::Solved { reward } => {
            view.push(ViewItem::ActionSuccess("That's the answer! Well done.".to_string()));
            world.player.riddles_solved.insert(room_id.clone(), true);
            world.player.record_task(format!("Solved the riddle in {room_id}"));
            if let Some(reward) = reward {
                view.push(ViewItem::ActionSuccess(format!("You receive the {reward}.")));
                world.player.add_item(reward);
            }
            info!("player solved the riddle in {room_id}");
            check_endgame(world, view);
        },
    }
    Ok(())
}

/// Offer a nudge: the current room's open riddle question when there is
/// one, otherwise the next general hint. Every request bumps the persisted
/// hint counter.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn hint_handler(world: &mut World, view: &mut View) -> Result<()> {
    let open_riddle = world
        .player_room_ref()?
        .riddle
        .as_ref()
        .filter(|riddle| !riddle.solved)
        .map(|riddle| riddle.question.clone());

    let hint = match open_riddle {
        Some(question) => format!("Maybe the riddle holds the key: \"{question}\""),
        None => HINTS[world.player.hints_given % HINTS.len()].to_string(),
    };
    world.player.hints_given += 1;
    info!("hint #{} served in {}", world.player.hints_given, world.player.current_room);
    view.push(ViewItem::EngineMessage(format!("Hint: {hint}")));
    Ok(())
}
