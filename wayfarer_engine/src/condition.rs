//! Win/lose condition evaluation.
//!
//! Conditions are closed trees of [`Predicate`]s evaluated as a pure
//! function over the player state. Every predicate present in a condition
//! must hold for it to fire; an empty condition never fires. The REPL
//! handlers invoke [`check_endgame`] after each state-changing action.

use log::info;

use crate::player::Player;
use crate::view::{View, ViewItem};
use crate::world::World;
use wayfarer_data::ConditionDef;

/// One recognized predicate kind within a win/lose condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Every listed item must match an inventory entry (case-insensitive).
    InventoryContainsAll(Vec<String>),
    /// Each listed item must appear in inventory at least the given number
    /// of times (case-insensitive; duplicates count).
    InventoryCount(Vec<(String, usize)>),
    /// At least one listed item must match an inventory entry.
    InventoryHasAny(Vec<String>),
    /// The current room identifier must equal this value exactly. Room ids
    /// are structural keys, so no case folding here.
    RoomEquals(String),
    /// Fires only when the flag is set and at least one room has been
    /// recorded as riddle-solved.
    RiddleSolved(bool),
}

impl Predicate {
    fn is_met(&self, player: &Player) -> bool {
        match self {
            Predicate::InventoryContainsAll(items) => {
                items.iter().all(|item| player.count_item(item) > 0)
            },
            Predicate::InventoryCount(wanted) => wanted
                .iter()
                .all(|(item, min_count)| player.count_item(item) >= *min_count),
            Predicate::InventoryHasAny(items) => {
                items.iter().any(|item| player.count_item(item) > 0)
            },
            Predicate::RoomEquals(room_id) => player.current_room == *room_id,
            Predicate::RiddleSolved(flag) => *flag && player.any_riddle_solved(),
        }
    }
}

/// A declarative condition: the conjunction of its predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Condition {
    pub predicates: Vec<Predicate>,
}

impl Condition {
    /// Build a runtime condition from its document form. Absent predicate
    /// kinds are simply not checked.
    pub fn from_def(def: &ConditionDef) -> Self {
        let mut predicates = Vec::new();
        if let Some(items) = &def.inventory_contains {
            predicates.push(Predicate::InventoryContainsAll(items.clone()));
        }
        if let Some(counts) = &def.inventory_count {
            predicates.push(Predicate::InventoryCount(
                counts.iter().map(|(item, count)| (item.clone(), *count)).collect(),
            ));
        }
        if let Some(items) = &def.inventory_has_any {
            predicates.push(Predicate::InventoryHasAny(items.clone()));
        }
        if let Some(room_id) = &def.in_room_equals {
            predicates.push(Predicate::RoomEquals(room_id.clone()));
        }
        if let Some(flag) = def.has_solved_riddle {
            predicates.push(Predicate::RiddleSolved(flag));
        }
        Self { predicates }
    }

    /// Evaluate the condition against the player. Empty conditions are
    /// never met.
    pub fn is_met(&self, player: &Player) -> bool {
        !self.predicates.is_empty() && self.predicates.iter().all(|p| p.is_met(player))
    }
}

/// Evaluate win first, then lose, against the current player state.
///
/// Either firing pushes its banner and clears the running flag; once the
/// game has stopped, no further checks happen.
pub fn check_endgame(world: &mut World, view: &mut View) {
    if !world.player.running {
        return;
    }
    if let Some(win) = &world.win_condition
        && win.is_met(&world.player)
    {
        info!("win condition met in room '{}'", world.player.current_room);
        view.push(ViewItem::GameWon);
        world.player.running = false;
        return;
    }
    if let Some(lose) = &world.lose_condition
        && lose.is_met(&world.player)
    {
        info!("lose condition met in room '{}'", world.player.current_room);
        view.push(ViewItem::GameLost);
        world.player.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ItemHolder;

    fn player_with(items: &[&str]) -> Player {
        let mut player = Player::new("Hall");
        for item in items {
            player.add_item((*item).to_string());
        }
        player
    }

    #[test]
    fn empty_condition_never_fires() {
        let player = player_with(&["treasure"]);
        assert!(!Condition::default().is_met(&player));
    }

    #[test]
    fn contains_all_matches_case_insensitively() {
        let cond = Condition {
            predicates: vec![Predicate::InventoryContainsAll(vec![
                "treasure".to_string(),
                "map".to_string(),
            ])],
        };
        assert!(cond.is_met(&player_with(&["Treasure", "MAP"])));
        assert!(!cond.is_met(&player_with(&["Treasure"])));
    }

    #[test]
    fn has_any_needs_one_match() {
        let cond = Condition {
            predicates: vec![Predicate::InventoryHasAny(vec![
                "rope".to_string(),
                "ladder".to_string(),
            ])],
        };
        assert!(cond.is_met(&player_with(&["Ladder"])));
        assert!(!cond.is_met(&player_with(&["bucket"])));
    }

    #[test]
    fn room_equals_is_exact_not_case_folded() {
        let cond = Condition {
            predicates: vec![Predicate::RoomEquals("Hall".to_string())],
        };
        let mut player = Player::new("Hall");
        assert!(cond.is_met(&player));
        player.current_room = "hall".to_string();
        assert!(!cond.is_met(&player));
    }

    #[test]
    fn count_and_riddle_predicates_conjoin() {
        // inventory_count of 3 golden coins AND has_solved_riddle
        let cond = Condition {
            predicates: vec![
                Predicate::InventoryCount(vec![("golden_coin".to_string(), 3)]),
                Predicate::RiddleSolved(true),
            ],
        };

        let mut two_coins_solved = player_with(&["golden_coin", "Golden_Coin"]);
        two_coins_solved.riddles_solved.insert("Garden".to_string(), true);
        assert!(!cond.is_met(&two_coins_solved));

        let three_coins_unsolved = player_with(&["golden_coin", "golden_coin", "golden_coin"]);
        assert!(!cond.is_met(&three_coins_unsolved));

        let mut three_coins_solved = player_with(&["golden_coin", "Golden_Coin", "GOLDEN_COIN"]);
        three_coins_solved.riddles_solved.insert("Garden".to_string(), true);
        assert!(cond.is_met(&three_coins_solved));
    }

    #[test]
    fn riddle_predicate_with_false_flag_never_fires() {
        let cond = Condition {
            predicates: vec![Predicate::RiddleSolved(false)],
        };
        let mut player = Player::new("Hall");
        player.riddles_solved.insert("Garden".to_string(), true);
        assert!(!cond.is_met(&player));
    }

    #[test]
    fn from_def_keeps_only_present_kinds() {
        let def: ConditionDef = ConditionDef {
            inventory_contains: Some(vec!["treasure".to_string()]),
            has_solved_riddle: Some(true),
            ..ConditionDef::default()
        };
        let cond = Condition::from_def(&def);
        assert_eq!(cond.predicates.len(), 2);
        assert!(matches!(&cond.predicates[0], Predicate::InventoryContainsAll(items) if items.len() == 1));
        assert!(matches!(&cond.predicates[1], Predicate::RiddleSolved(true)));
    }
}
