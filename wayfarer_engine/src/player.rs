//! Player -- the mutable session state, distinct from the static world.

use std::collections::HashMap;

use crate::world::ItemHolder;

/// Everything that changes as the player acts: location, inventory,
/// per-NPC dialogue progress, solved riddles, hints, completed tasks, and
/// the running flag that keeps the session alive.
#[derive(Debug, Clone)]
pub struct Player {
    pub current_room: String,
    pub inventory: Vec<String>,
    pub npc_progress: HashMap<String, usize>,
    pub riddles_solved: HashMap<String, bool>,
    pub hints_given: usize,
    pub completed_tasks: Vec<String>,
    pub running: bool,
}

impl Player {
    /// Create a fresh player standing in the given start room.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current_room: start.into(),
            inventory: Vec::new(),
            npc_progress: HashMap::new(),
            riddles_solved: HashMap::new(),
            hints_given: 0,
            completed_tasks: Vec::new(),
            running: true,
        }
    }

    /// Count how many inventory entries match the name, case-insensitively.
    /// Duplicates are meaningful for count-based win conditions.
    pub fn count_item(&self, name: &str) -> usize {
        self.inventory.iter().filter(|held| held.eq_ignore_ascii_case(name)).count()
    }

    /// Speak one dialogue line: returns the index of the line to deliver
    /// and advances progress, which saturates at the final line index.
    pub fn advance_dialogue(&mut self, key: &str, line_count: usize) -> usize {
        let last = line_count.saturating_sub(1);
        let progress = self.npc_progress.get(key).copied().unwrap_or(0);
        if progress < last {
            self.npc_progress.insert(key.to_string(), progress + 1);
        }
        progress.min(last)
    }

    /// True once any room has been recorded as riddle-solved.
    pub fn any_riddle_solved(&self) -> bool {
        self.riddles_solved.values().any(|solved| *solved)
    }

    /// Append an entry to the completed-task log, once.
    pub fn record_task(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if !self.completed_tasks.contains(&entry) {
            self.completed_tasks.push(entry);
        }
    }
}

impl ItemHolder for Player {
    fn add_item(&mut self, item: String) {
        self.inventory.push(item);
    }

    fn remove_item(&mut self, name: &str) -> Option<String> {
        let idx = self.inventory.iter().position(|held| held.eq_ignore_ascii_case(name))?;
        Some(self.inventory.remove(idx))
    }

    fn contains_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|held| held.eq_ignore_ascii_case(name))
    }
}
