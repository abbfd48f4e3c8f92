//! Player state management.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::quest::{Quest, QuestLog};

/// Upper bound for health.
pub const MAX_HEALTH: i32 = 100;
/// Health of a fresh adventurer.
pub const DEFAULT_HEALTH: i32 = MAX_HEALTH;
/// Gold in a fresh adventurer's purse.
pub const DEFAULT_GOLD: i32 = 50;

/// The player's mutable state for the whole game.
///
/// Fields are private so the invariants hold after every mutation:
/// health stays in `0..=MAX_HEALTH`, gold never drops below zero, the
/// inventory holds no duplicates, and completed quests are only appended.
/// Deserialization checks the same invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlayerState")]
pub struct PlayerState {
    health: i32,
    gold: i32,
    reputation: i32,
    inventory: Vec<String>,
    quests: QuestLog,
    completed_quests: Vec<String>,
}

/// Unchecked serialized form of [`PlayerState`].
#[derive(Deserialize)]
struct RawPlayerState {
    health: i32,
    gold: i32,
    reputation: i32,
    inventory: Vec<String>,
    quests: QuestLog,
    completed_quests: Vec<String>,
}

impl TryFrom<RawPlayerState> for PlayerState {
    type Error = CoreError;

    fn try_from(raw: RawPlayerState) -> CoreResult<Self> {
        if !(0..=MAX_HEALTH).contains(&raw.health) {
            return Err(CoreError::InvalidState(format!(
                "health {} outside 0..={MAX_HEALTH}",
                raw.health
            )));
        }
        if raw.gold < 0 {
            return Err(CoreError::InvalidState(format!("negative gold {}", raw.gold)));
        }
        for (i, item) in raw.inventory.iter().enumerate() {
            if raw.inventory[..i].contains(item) {
                return Err(CoreError::InvalidState(format!("duplicate item \"{item}\"")));
            }
        }

        let mut seen = Vec::with_capacity(raw.completed_quests.len());
        for name in &raw.completed_quests {
            let quest: Quest = name.parse()?;
            if seen.contains(&quest) || !raw.quests.is_completed(quest) {
                return Err(CoreError::InvalidState(format!(
                    "completed quest \"{name}\" does not match the quest log"
                )));
            }
            seen.push(quest);
        }
        if let Some(missing) = Quest::ALL
            .into_iter()
            .find(|q| raw.quests.is_completed(*q) && !seen.contains(q))
        {
            return Err(CoreError::InvalidState(format!(
                "quest \"{missing}\" completed but not recorded"
            )));
        }

        Ok(Self {
            health: raw.health,
            gold: raw.gold,
            reputation: raw.reputation,
            inventory: raw.inventory,
            quests: raw.quests,
            completed_quests: raw.completed_quests,
        })
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// Create a player with full health, 50 gold, and nothing else.
    pub fn new() -> Self {
        Self {
            health: DEFAULT_HEALTH,
            gold: DEFAULT_GOLD,
            reputation: 0,
            inventory: Vec::new(),
            quests: QuestLog::new(),
            completed_quests: Vec::new(),
        }
    }

    /// Current health.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Current gold.
    pub fn gold(&self) -> i32 {
        self.gold
    }

    /// Current reputation.
    pub fn reputation(&self) -> i32 {
        self.reputation
    }

    /// Items carried, in the order they were acquired.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Quest progress.
    pub fn quests(&self) -> &QuestLog {
        &self.quests
    }

    /// Names of completed quests, in completion order.
    pub fn completed_quests(&self) -> &[String] {
        &self.completed_quests
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Add an item to the end of the inventory.
    ///
    /// Returns `false` (and changes nothing) if the item is already carried.
    pub fn add_item(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.has_item(&item) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Remove an item from inventory.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Change health by `delta`, clamped to `0..=MAX_HEALTH`.
    pub fn modify_health(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta).clamp(0, MAX_HEALTH);
    }

    /// Change gold by `delta`; gold never drops below zero.
    pub fn modify_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add(delta).max(0);
    }

    /// Change reputation by `delta`.
    pub fn modify_reputation(&mut self, delta: i32) {
        self.reputation = self.reputation.saturating_add(delta);
    }

    /// Take on a quest. Returns `true` if it was not accepted before.
    pub fn accept_quest(&mut self, quest: Quest) -> bool {
        self.quests.accept(quest)
    }

    /// Complete a quest and record its name.
    ///
    /// Returns `false` if the quest was already completed; the completed
    /// list is left untouched in that case.
    pub fn complete_quest(&mut self, quest: Quest) -> bool {
        if !self.quests.complete(quest) {
            return false;
        }
        self.completed_quests.push(quest.name().to_string());
        true
    }
}
