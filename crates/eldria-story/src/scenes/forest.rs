//! The forest: the crossroads, the hidden clearing, and the waterfall cave.

use eldria_core::Quest;
use eldria_fiction::{Condition, Console, Effect, FictionResult, Menu};

use super::{Engine, enter, narrate};
use crate::items;
use crate::place::Place;

/// Accepted and not yet rewarded.
fn quest_open(quest: Quest) -> Condition {
    Condition::And(vec![
        Condition::QuestAccepted(quest),
        Condition::QuestCompleted(quest).negate(),
    ])
}

pub(super) fn forest_path(engine: &mut Engine, console: &mut dyn Console) -> FictionResult<()> {
    enter(console, Place::ForestPath)?;
    narrate(
        console,
        &[
            "The path winds beneath ancient trees whose branches knit into a roof.",
            "Sunlight drifts through the leaves in shifting patterns.",
            "Somewhere ahead, water runs and unseen creatures call.",
        ],
    )?;
    console.blank()?;
    narrate(
        console,
        &[
            "DECISION: The Forest Crossroads",
            "The path splits three ways: a well-worn road toward a village,",
            "a narrow, overgrown trail deeper into the woods, and a track toward the sound of water.",
        ],
    )?;
    console.blank()?;

    let choice = Menu::new()
        .with_option("Take the well-traveled path")
        .with_option("Follow the overgrown trail")
        .with_option("Follow the water sound")
        .with_option("Return to village")
        .ask(console)?;

    match choice {
        0 => {
            narrate(
                console,
                &[
                    "You follow the well-traveled road...",
                    "Before long the stone roofs of Stonebridge come into view.",
                ],
            )?;
            engine.apply(console, &[Effect::Reputation(2)])?;
            if engine.check(&quest_open(Quest::Delivery)) {
                engine.apply(
                    console,
                    &[
                        Effect::Gold(25),
                        Effect::take(items::DELIVERY_PACKAGE),
                        Effect::CompleteQuest(Quest::Delivery),
                    ],
                )?;
                console.display_text("You deliver the package and earn 25 gold!")?;
            }
            engine.go_to(Place::Stonebridge);
        }
        1 => {
            narrate(
                console,
                &[
                    "You push down the overgrown trail...",
                    "It grows harder and harder to follow.",
                    "Then the brush parts onto a hidden clearing thick with rare herbs!",
                ],
            )?;
            if engine.check(&quest_open(Quest::HerbGathering)) {
                engine.apply(
                    console,
                    &[
                        Effect::give(items::RARE_HERBS),
                        Effect::Gold(15),
                        Effect::give(items::HEALING_POTION),
                        Effect::CompleteQuest(Quest::HerbGathering),
                    ],
                )?;
                console.display_text("You found the rare herbs and completed the quest!")?;
            } else {
                engine.apply(console, &[Effect::give(items::RARE_HERBS)])?;
                console.display_text("You gather some rare herbs. They might be valuable!")?;
            }
            engine.go_to(Place::HiddenClearing);
        }
        2 => {
            narrate(
                console,
                &[
                    "You follow the sound of water...",
                    "A waterfall tumbles over the rocks, and behind it hides a small cave.",
                    "Inside, an old chest waits in the gloom.",
                ],
            )?;
            engine.go_to(Place::WaterfallCave);
        }
        _ => {
            engine.go_to(Place::Start);
        }
    }
    Ok(())
}

pub(super) fn hidden_clearing(engine: &mut Engine, console: &mut dyn Console) -> FictionResult<()> {
    enter(console, Place::HiddenClearing)?;
    narrate(
        console,
        &[
            "Golden light bathes the clearing, and rare flowers bloom everywhere.",
            "At its center stands a stone altar carved with ancient runes.",
        ],
    )?;
    console.blank()?;

    let choice = Menu::new()
        .with_option("Examine the altar")
        .with_option("Gather more herbs")
        .with_option("Return to forest path")
        .ask(console)?;

    match choice {
        0 => {
            narrate(
                console,
                &[
                    "The runes glow faintly as you draw near...",
                    "A surge of magical energy washes over you!",
                ],
            )?;
            engine.apply(console, &[Effect::Health(30), Effect::Reputation(10)])?;
            console.display_text("The altar's magic restores your health and blesses you!")?;
            engine.go_to(Place::HiddenClearing);
        }
        1 => {
            engine.apply(console, &[Effect::give(items::MORE_RARE_HERBS)])?;
            console.display_text("You gather more of the rare herbs.")?;
            engine.go_to(Place::HiddenClearing);
        }
        _ => {
            engine.go_to(Place::ForestPath);
        }
    }
    Ok(())
}

pub(super) fn waterfall_cave(engine: &mut Engine, console: &mut dyn Console) -> FictionResult<()> {
    enter(console, Place::WaterfallCave)?;
    narrate(
        console,
        &[
            "Glowing crystals light the small cave behind the falls.",
            "An ornate chest sits in the middle, ringed by strange markings on the floor.",
            "The air is heavy with old magic.",
        ],
    )?;
    console.blank()?;
    narrate(
        console,
        &[
            "DECISION: The Ancient Chest",
            "The chest looks valuable, but the markings suggest a trap.",
            "A narrow passage leads deeper into the cave.",
        ],
    )?;
    console.blank()?;

    let choice = Menu::new()
        .with_option("Try to open the chest")
        .with_option("Explore the deeper passage")
        .with_option("Leave the cave")
        .ask(console)?;

    match choice {
        0 => {
            console.display_text("You approach the chest carefully...")?;
            if engine.check(&Condition::has_item(items::ANCIENT_MAP)) {
                console.display_text("The map's markings show you how to slip past the trap!")?;
                engine.apply(
                    console,
                    &[
                        Effect::give(items::ANCIENT_ARTIFACT),
                        Effect::Gold(100),
                        Effect::Reputation(15),
                    ],
                )?;
                console.display_text("The chest opens to reveal a priceless artifact!")?;
            } else {
                console.display_text("A magical trap springs to life!")?;
                engine.apply(console, &[Effect::Health(-30)])?;
                console.display_text("The trap wounds you, but you manage to escape.")?;
            }
        }
        1 => {
            narrate(
                console,
                &[
                    "You venture deeper into the cave...",
                    "The passage opens onto a forgotten library!",
                ],
            )?;
            engine.apply(
                console,
                &[Effect::give(items::ANCIENT_TOME), Effect::Reputation(20)],
            )?;
            console.display_text("The knowledge here could be priceless.")?;
        }
        _ => {
            console.display_text("You decide to leave the cave for now.")?;
        }
    }
    engine.go_to(Place::ForestPath);
    Ok(())
}
