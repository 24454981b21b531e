//! NPC Module

/// A non-playable character.
///
/// NPCs are stateless: dialogue progress is tracked on the player, keyed by
/// [`progress_key`], so one NPC definition can appear in several rooms
/// without the conversations bleeding into each other.
#[derive(Debug, Clone)]
pub struct Npc {
    pub name: String,
    pub dialogue: Vec<String>,
}

impl Npc {
    /// Case-insensitive match against either the NPC's map key or its
    /// display name.
    pub fn matches(&self, key: &str, query: &str) -> bool {
        key.eq_ignore_ascii_case(query) || self.name.eq_ignore_ascii_case(query)
    }

    /// The dialogue line for a given progress value, clamped to the final
    /// line. Returns `None` only when the NPC has nothing to say at all.
    pub fn line_at(&self, progress: usize) -> Option<&str> {
        let last = self.dialogue.len().checked_sub(1)?;
        self.dialogue.get(progress.min(last)).map(String::as_str)
    }
}

/// Dialogue-progress key for a given room/NPC pair.
pub fn progress_key(room_id: &str, npc_id: &str) -> String {
    format!("{room_id}:{npc_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gardener() -> Npc {
        Npc {
            name: "Old Gardener".to_string(),
            dialogue: vec![
                "Mind the roses.".to_string(),
                "The shed key went missing last spring.".to_string(),
                "Leave me be now.".to_string(),
            ],
        }
    }

    #[test]
    fn matches_key_or_display_name_case_insensitively() {
        let npc = gardener();
        assert!(npc.matches("old_gardener", "OLD_GARDENER"));
        assert!(npc.matches("old_gardener", "old gardener"));
        assert!(!npc.matches("old_gardener", "groundskeeper"));
    }

    #[test]
    fn line_at_clamps_to_final_line() {
        let npc = gardener();
        assert_eq!(npc.line_at(0), Some("Mind the roses."));
        assert_eq!(npc.line_at(2), Some("Leave me be now."));
        assert_eq!(npc.line_at(99), Some("Leave me be now."));
    }

    #[test]
    fn silent_npc_has_no_lines() {
        let npc = Npc {
            name: "Statue".to_string(),
            dialogue: Vec::new(),
        };
        assert_eq!(npc.line_at(0), None);
    }

    #[test]
    fn progress_keys_are_room_scoped() {
        assert_eq!(progress_key("Garden", "old_man"), "Garden:old_man");
        assert_ne!(progress_key("Garden", "old_man"), progress_key("Hall", "old_man"));
    }
}
