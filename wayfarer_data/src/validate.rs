use std::fmt;

use crate::WorldDoc;

/// Validation error for a malformed world document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate structural invariants of a world document.
///
/// Only failures that make the document unplayable are reported: an empty
/// room map, a start room that names no real room, or a riddle that can
/// never be answered. Exits pointing at undefined rooms are deliberately
/// tolerated -- the engine reports those at traversal time.
///
/// ```
/// use wayfarer_data::{RoomDef, WorldDoc, validate_world};
///
/// let mut world = WorldDoc::default();
/// world.rooms.insert("start".into(), RoomDef::default());
/// world.start = "start".into();
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDoc) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "world contains no rooms".to_string(),
        });
    }

    if world.start.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "start room missing".to_string(),
        });
    } else if !world.rooms.contains_key(&world.start) {
        errors.push(ValidationError::MissingReference {
            kind: "room",
            id: world.start.clone(),
            context: "start room".to_string(),
        });
    }

    for (room_id, room) in &world.rooms {
        if let Some(riddle) = &room.riddle
            && riddle.answer.trim().is_empty()
        {
            errors.push(ValidationError::InvalidValue {
                context: format!("riddle in room '{room_id}' has an empty answer"),
            });
        }
    }

    errors
}
