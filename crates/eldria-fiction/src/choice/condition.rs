//! Conditions evaluated against the player's state.

use eldria_core::{PlayerState, Quest};

/// A condition a scene branch can depend on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Condition {
    /// The player carries an item.
    HasItem(String),
    /// The player has at least this much gold.
    GoldAtLeast(i32),
    /// The quest has been accepted.
    QuestAccepted(Quest),
    /// The quest has been completed.
    QuestCompleted(Quest),
    /// Logical NOT.
    Not(Box<Condition>),
    /// Logical AND.
    And(Vec<Condition>),
    /// Logical OR.
    Or(Vec<Condition>),
    /// Always true.
    #[default]
    Always,
}

impl Condition {
    /// The player carries the named item.
    pub fn has_item(item: impl Into<String>) -> Self {
        Condition::HasItem(item.into())
    }

    /// Negate this condition.
    pub fn negate(self) -> Self {
        Condition::Not(Box::new(self))
    }

    /// Evaluate the condition against the player.
    pub fn evaluate(&self, player: &PlayerState) -> bool {
        match self {
            Condition::HasItem(item) => player.has_item(item),
            Condition::GoldAtLeast(amount) => player.gold() >= *amount,
            Condition::QuestAccepted(q) => player.quests().is_accepted(*q),
            Condition::QuestCompleted(q) => player.quests().is_completed(*q),
            Condition::Not(inner) => !inner.evaluate(player),
            Condition::And(conditions) => conditions.iter().all(|c| c.evaluate(player)),
            Condition::Or(conditions) => conditions.iter().any(|c| c.evaluate(player)),
            Condition::Always => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_true() {
        assert!(Condition::Always.evaluate(&PlayerState::new()));
    }

    #[test]
    fn has_item() {
        let mut player = PlayerState::new();
        let cond = Condition::has_item("Ancient Map");
        assert!(!cond.evaluate(&player));

        player.add_item("Ancient Map");
        assert!(cond.evaluate(&player));
    }

    #[test]
    fn gold_threshold_is_inclusive() {
        let mut player = PlayerState::new();
        player.modify_gold(-30);
        assert!(Condition::GoldAtLeast(20).evaluate(&player));
        assert!(!Condition::GoldAtLeast(21).evaluate(&player));
    }

    #[test]
    fn quest_conditions() {
        let mut player = PlayerState::new();
        player.accept_quest(Quest::Delivery);

        assert!(Condition::QuestAccepted(Quest::Delivery).evaluate(&player));
        assert!(!Condition::QuestCompleted(Quest::Delivery).evaluate(&player));
        assert!(!Condition::QuestAccepted(Quest::HerbGathering).evaluate(&player));
    }

    #[test]
    fn logical_combinators() {
        let mut player = PlayerState::new();
        player.add_item("Rare Herbs");

        let has_herbs = Condition::has_item("Rare Herbs");
        let has_map = Condition::has_item("Ancient Map");

        assert!(has_map.clone().negate().evaluate(&player));
        assert!(!Condition::And(vec![has_herbs.clone(), has_map.clone()]).evaluate(&player));
        assert!(Condition::Or(vec![has_herbs, has_map]).evaluate(&player));
    }
}
