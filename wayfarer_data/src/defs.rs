use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier used across world-document references.
pub type Id = String;

/// Top-level world document loaded by the engine.
///
/// Everything except `start` is optional in the source JSON; missing
/// sections deserialize to their empty forms and are caught (or tolerated)
/// by [`crate::validate_world`] rather than by serde.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDoc {
    #[serde(default)]
    pub rooms: BTreeMap<Id, RoomDef>,
    #[serde(default)]
    pub start: Id,
    #[serde(default)]
    pub win_condition: Option<ConditionDef>,
    #[serde(default)]
    pub lose_condition: Option<ConditionDef>,
    #[serde(default)]
    pub metadata: MetadataDef,
    #[serde(default)]
    pub tasks: Option<QuestsDef>,
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoomDef {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<Id>,
    #[serde(default)]
    pub exits: BTreeMap<String, ExitDef>,
    #[serde(default)]
    pub npcs: BTreeMap<Id, NpcDef>,
    pub riddle: Option<RiddleDef>,
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// Exit metadata for room navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub to: Id,
    #[serde(default)]
    pub locked: bool,
    pub key: Option<Id>,
}

/// A non-player character and their ordered dialogue script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcDef {
    pub name: String,
    #[serde(default)]
    pub dialogue: Vec<String>,
}

/// A room-bound riddle with an optional reward item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiddleDef {
    pub question: String,
    pub answer: String,
    pub reward: Option<Id>,
    #[serde(default)]
    pub solved: bool,
}

/// Declarative win/lose condition. Each field is an independent predicate;
/// every predicate present must hold for the condition to fire.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConditionDef {
    pub inventory_contains: Option<Vec<Id>>,
    pub inventory_count: Option<BTreeMap<Id, usize>>,
    pub inventory_has_any: Option<Vec<Id>>,
    pub in_room_equals: Option<Id>,
    pub has_solved_riddle: Option<bool>,
}

impl ConditionDef {
    /// True when no predicate field is present at all.
    pub fn is_empty(&self) -> bool {
        self.inventory_contains.is_none()
            && self.inventory_count.is_none()
            && self.inventory_has_any.is_none()
            && self.in_room_equals.is_none()
            && self.has_solved_riddle.is_none()
    }
}

/// Display-only world metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetadataDef {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Display-only quest summary shown by the `tasks` command.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestsDef {
    pub main_quest: Option<String>,
    #[serde(default)]
    pub side_quests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_doc_parses_minimal_json() {
        let doc: WorldDoc = serde_json::from_str(
            r#"{
                "rooms": {
                    "Hall": {
                        "description": "A hall.",
                        "items": ["map"],
                        "exits": {"east": {"to": "Kitchen"}}
                    },
                    "Kitchen": {
                        "description": "A kitchen.",
                        "exits": {
                            "west": {"to": "Hall"},
                            "north": {"to": "Vault", "locked": true, "key": "silver_key"}
                        }
                    },
                    "Vault": {"description": "Shiny."}
                },
                "start": "Hall",
                "win_condition": {"inventory_contains": ["treasure"]}
            }"#,
        )
        .expect("document should parse");

        assert_eq!(doc.start, "Hall");
        assert_eq!(doc.rooms.len(), 3);
        let north = &doc.rooms["Kitchen"].exits["north"];
        assert!(north.locked);
        assert_eq!(north.key.as_deref(), Some("silver_key"));
        let win = doc.win_condition.expect("win condition present");
        assert_eq!(win.inventory_contains.as_deref(), Some(&["treasure".to_string()][..]));
        assert!(win.inventory_count.is_none());
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let doc: WorldDoc =
            serde_json::from_str(r#"{"rooms": {"A": {}}, "start": "A"}"#).expect("should parse");
        let room = &doc.rooms["A"];
        assert!(room.items.is_empty());
        assert!(room.exits.is_empty());
        assert!(room.npcs.is_empty());
        assert!(room.riddle.is_none());
        assert!(doc.win_condition.is_none());
        assert!(doc.tasks.is_none());
        assert!(doc.metadata.title.is_empty());
    }

    #[test]
    fn condition_def_reports_emptiness() {
        assert!(ConditionDef::default().is_empty());
        let cond = ConditionDef {
            has_solved_riddle: Some(true),
            ..ConditionDef::default()
        };
        assert!(!cond.is_empty());
    }

    #[test]
    fn riddle_solved_flag_defaults_false() {
        let riddle: RiddleDef =
            serde_json::from_str(r#"{"question": "Why?", "answer": "because"}"#).expect("should parse");
        assert!(!riddle.solved);
        assert!(riddle.reward.is_none());
    }
}
