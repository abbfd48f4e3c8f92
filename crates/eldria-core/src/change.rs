//! Reports of what an effect did to the player.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quest::Quest;

/// Something that happened to the player, reported after the fact.
///
/// Stat variants carry the requested delta, not the clamped amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum StateChange {
    /// An item entered the inventory.
    ItemAcquired(String),
    /// An item left the inventory.
    ItemLost(String),
    /// Health changed.
    Health(i32),
    /// Gold changed.
    Gold(i32),
    /// Reputation changed.
    Reputation(i32),
    /// A quest was taken on.
    QuestAccepted(Quest),
    /// A quest was completed.
    QuestCompleted(Quest),
}

impl StateChange {
    /// True for changes the player would consider good news.
    pub fn is_gain(&self) -> bool {
        match self {
            StateChange::ItemAcquired(_)
            | StateChange::QuestAccepted(_)
            | StateChange::QuestCompleted(_) => true,
            StateChange::ItemLost(_) => false,
            StateChange::Health(d) | StateChange::Gold(d) | StateChange::Reputation(d) => *d > 0,
        }
    }
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateChange::ItemAcquired(item) => write!(f, "You acquired: {item}"),
            StateChange::ItemLost(item) => write!(f, "You handed over: {item}"),
            StateChange::Health(d) if *d >= 0 => write!(f, "Health restored by {d}"),
            StateChange::Health(d) => write!(f, "Health reduced by {}", d.unsigned_abs()),
            StateChange::Gold(d) if *d >= 0 => write!(f, "Gained {d} gold"),
            StateChange::Gold(d) => write!(f, "Lost {} gold", d.unsigned_abs()),
            StateChange::Reputation(d) if *d >= 0 => write!(f, "Reputation increased by {d}"),
            StateChange::Reputation(d) => {
                write!(f, "Reputation decreased by {}", d.unsigned_abs())
            }
            StateChange::QuestAccepted(q) => write!(f, "Quest accepted: {q}"),
            StateChange::QuestCompleted(q) => write!(f, "Quest completed: {q}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_stat_changes() {
        assert_eq!(StateChange::Gold(25).to_string(), "Gained 25 gold");
        assert_eq!(StateChange::Gold(-20).to_string(), "Lost 20 gold");
        assert_eq!(StateChange::Health(-30).to_string(), "Health reduced by 30");
        assert_eq!(StateChange::Health(20).to_string(), "Health restored by 20");
        assert_eq!(
            StateChange::Reputation(-5).to_string(),
            "Reputation decreased by 5"
        );
    }

    #[test]
    fn display_items_and_quests() {
        assert_eq!(
            StateChange::ItemAcquired("Ancient Map".into()).to_string(),
            "You acquired: Ancient Map"
        );
        assert_eq!(
            StateChange::QuestCompleted(Quest::Delivery).to_string(),
            "Quest completed: Delivery Quest"
        );
    }

    #[test]
    fn gains_and_losses() {
        assert!(StateChange::Gold(1).is_gain());
        assert!(!StateChange::Gold(-1).is_gain());
        assert!(!StateChange::ItemLost("Delivery Package".into()).is_gain());
        assert!(StateChange::QuestAccepted(Quest::WolfHunt).is_gain());
    }

    #[test]
    fn minimum_delta_does_not_overflow() {
        assert_eq!(
            StateChange::Gold(i32::MIN).to_string(),
            "Lost 2147483648 gold"
        );
    }
}
