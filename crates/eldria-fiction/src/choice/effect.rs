//! Effects that modify player state.

use eldria_core::{PlayerState, Quest, StateChange};

/// A change a scene applies to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Change health (clamped).
    Health(i32),
    /// Change gold (floored at zero).
    Gold(i32),
    /// Change reputation.
    Reputation(i32),
    /// Give an item to the player.
    GiveItem(String),
    /// Take an item from the player.
    TakeItem(String),
    /// Take on a quest.
    AcceptQuest(Quest),
    /// Complete a quest.
    CompleteQuest(Quest),
}

impl Effect {
    /// Give the named item.
    pub fn give(item: impl Into<String>) -> Self {
        Effect::GiveItem(item.into())
    }

    /// Take the named item.
    pub fn take(item: impl Into<String>) -> Self {
        Effect::TakeItem(item.into())
    }

    /// Apply the effect, returning a report if anything changed.
    ///
    /// Duplicate items, absent items, zero deltas, and repeated quest
    /// transitions produce no report.
    pub fn apply(&self, player: &mut PlayerState) -> Option<StateChange> {
        match self {
            Effect::Health(0) | Effect::Gold(0) | Effect::Reputation(0) => None,
            Effect::Health(d) => {
                player.modify_health(*d);
                Some(StateChange::Health(*d))
            }
            Effect::Gold(d) => {
                player.modify_gold(*d);
                Some(StateChange::Gold(*d))
            }
            Effect::Reputation(d) => {
                player.modify_reputation(*d);
                Some(StateChange::Reputation(*d))
            }
            Effect::GiveItem(item) => player
                .add_item(item.as_str())
                .then(|| StateChange::ItemAcquired(item.clone())),
            Effect::TakeItem(item) => player
                .remove_item(item)
                .then(|| StateChange::ItemLost(item.clone())),
            Effect::AcceptQuest(q) => player
                .accept_quest(*q)
                .then_some(StateChange::QuestAccepted(*q)),
            Effect::CompleteQuest(q) => player
                .complete_quest(*q)
                .then_some(StateChange::QuestCompleted(*q)),
        }
    }
}
