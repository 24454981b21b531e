//! Save-game serialization helpers.
//!
//! A save captures the player-centric fields only: room-level mutations
//! (item placement, lock state, riddle flags) stay with the in-memory
//! world and are not reconstructed on load.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::Player;

/// Save file consulted when no filename is given.
pub const DEFAULT_SAVE_FILE: &str = "save.json";

/// Reasons a save file cannot be restored. All of these are reported to the
/// player as a single diagnostic and leave the session state untouched.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no save file found at '{0}'")]
    Missing(String),
    #[error("save file is corrupted")]
    Corrupted,
    #[error("save file refers to unknown room '{0}'")]
    UnknownRoom(String),
    #[error("error reading save: {0}")]
    Io(#[from] io::Error),
}

/// Snapshot of the persisted player fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default)]
    pub current: String,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub npc_progress: HashMap<String, usize>,
    #[serde(default)]
    pub completed_tasks: Vec<String>,
    #[serde(default)]
    pub riddles_solved: HashMap<String, bool>,
    #[serde(default)]
    pub hints_given: usize,
}

impl SaveData {
    /// Capture an immutable snapshot of the player at this moment.
    pub fn capture(player: &Player) -> Self {
        Self {
            current: player.current_room.clone(),
            inventory: player.inventory.clone(),
            npc_progress: player.npc_progress.clone(),
            completed_tasks: player.completed_tasks.clone(),
            riddles_solved: player.riddles_solved.clone(),
            hints_given: player.hints_given,
        }
    }

    /// Replace the persisted player fields wholesale. The running flag is
    /// session state, not save state, and is left alone.
    pub fn apply(self, player: &mut Player) {
        player.current_room = self.current;
        player.inventory = self.inventory;
        player.npc_progress = self.npc_progress;
        player.completed_tasks = self.completed_tasks;
        player.riddles_solved = self.riddles_solved;
        player.hints_given = self.hints_given;
    }
}

/// Serialize the player snapshot to a JSON save file.
///
/// # Errors
/// Returns an error if serialization or the file write fails.
pub fn write_save(path: &Path, player: &Player) -> Result<()> {
    let snapshot = SaveData::capture(player);
    let raw = serde_json::to_string_pretty(&snapshot).context("serializing save data")?;
    fs::write(path, raw).with_context(|| format!("writing save file {}", path.display()))?;
    Ok(())
}

/// Read and parse a save file.
///
/// # Errors
/// - [`SaveError::Missing`] when there is no file at the path
/// - [`SaveError::Corrupted`] when the content is not a valid save document
/// - [`SaveError::Io`] for any other read failure
pub fn read_save(path: &Path) -> std::result::Result<SaveData, SaveError> {
    let raw = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            SaveError::Missing(path.display().to_string())
        } else {
            SaveError::Io(err)
        }
    })?;
    serde_json::from_str(&raw).map_err(|_| SaveError::Corrupted)
}
