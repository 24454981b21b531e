//! Built-in default world.
//!
//! The session controller injects [`sample_world`] as the fallback provider
//! when no world file exists, so a bare `wayfarer` invocation is always
//! playable. The core model stays free of embedded content; this module is
//! the only place that knows about the sample map.

use wayfarer_data::{
    ConditionDef, ExitDef, MetadataDef, NpcDef, QuestsDef, RiddleDef, RoomDef, WorldDoc,
};

/// A small four-room adventure: find the silver key, unlock the way north,
/// and carry the treasure out.
pub fn sample_world() -> WorldDoc {
    let mut doc = WorldDoc::default();

    let mut hall = RoomDef {
        description: "You are standing in a long hall. A door leads east to the Kitchen and south \
                      to the Garden."
            .to_string(),
        ..RoomDef::default()
    };
    hall.items.push("map".to_string());
    hall.exits.insert("east".to_string(), unlocked("Kitchen"));
    hall.exits.insert("south".to_string(), unlocked("Garden"));
    hall.tasks.push("Get your bearings.".to_string());

    let mut kitchen = RoomDef {
        description: "A tidy kitchen with a faint smell of spice. There's a locked door to the \
                      north."
            .to_string(),
        ..RoomDef::default()
    };
    kitchen.items.push("knife".to_string());
    kitchen.items.push("silver_key".to_string());
    kitchen.exits.insert("west".to_string(), unlocked("Hall"));
    kitchen.exits.insert(
        "north".to_string(),
        ExitDef {
            to: "Treasure Room".to_string(),
            locked: true,
            key: Some("silver_key".to_string()),
        },
    );

    let mut garden = RoomDef {
        description: "A small garden. The flowers are in bloom.".to_string(),
        ..RoomDef::default()
    };
    garden.items.push("flower".to_string());
    garden.exits.insert("north".to_string(), unlocked("Hall"));
    garden.npcs.insert(
        "old_man".to_string(),
        NpcDef {
            name: "Old Man".to_string(),
            dialogue: vec![
                "Stay awhile and listen...".to_string(),
                "The treasure lies behind the locked door.".to_string(),
                "A sharp mind opens more doors than a sharp knife.".to_string(),
            ],
        },
    );
    garden.riddle = Some(RiddleDef {
        question: "What has a bed but never sleeps, and runs but never walks?".to_string(),
        answer: "a river".to_string(),
        reward: Some("golden_coin".to_string()),
        solved: false,
    });
    garden.tasks.push("Hear the old man out.".to_string());

    let mut treasure_room = RoomDef {
        description: "You've found the treasure room! A glittering chest sits in the centre."
            .to_string(),
        ..RoomDef::default()
    };
    treasure_room.items.push("treasure".to_string());
    treasure_room.exits.insert("south".to_string(), unlocked("Kitchen"));

    doc.rooms.insert("Hall".to_string(), hall);
    doc.rooms.insert("Kitchen".to_string(), kitchen);
    doc.rooms.insert("Garden".to_string(), garden);
    doc.rooms.insert("Treasure Room".to_string(), treasure_room);
    doc.start = "Hall".to_string();
    doc.win_condition = Some(ConditionDef {
        inventory_contains: Some(vec!["treasure".to_string()]),
        ..ConditionDef::default()
    });
    doc.metadata = MetadataDef {
        title: "The Locked Door".to_string(),
        author: "the Wayfarer authors".to_string(),
        description: "A small adventure about keys, flowers, and one very patient old man."
            .to_string(),
    };
    doc.tasks = Some(QuestsDef {
        main_quest: Some("Find the treasure and take it.".to_string()),
        side_quests: vec!["Solve the garden riddle.".to_string()],
    });
    doc
}

fn unlocked(to: &str) -> ExitDef {
    ExitDef {
        to: to.to_string(),
        locked: false,
        key: None,
    }
}
