//! Moonhaven: the square, the tavern, the notice board, the elder, and the
//! inventory screen.

use eldria_core::Quest;
use eldria_fiction::{Condition, Console, Effect, FictionResult, Menu};

use super::{Engine, enter, narrate};
use crate::items;
use crate::place::Place;

/// Cost of the stranger's map.
const MAP_PRICE: i32 = 20;

pub(super) fn start(engine: &mut Engine, console: &mut dyn Console) -> FictionResult<()> {
    enter(console, Place::Start)?;
    narrate(
        console,
        &[
            "You stand in the heart of Moonhaven, a small village cradled by rolling hills.",
            "Pine scents the cold air, and somewhere a blacksmith's hammer rings.",
            "Villagers go about their day, glancing at you with open curiosity.",
        ],
    )?;
    console.blank()?;
    console.show_status(engine.player())?;

    let choice = Menu::new()
        .with_heading("What would you like to do?")
        .with_option("Visit the local tavern")
        .with_option("Check the notice board")
        .with_option("Talk to the village elder")
        .with_option("Explore the forest path")
        .with_option("Check your inventory")
        .ask(console)?;

    let next = match choice {
        0 => Place::Tavern,
        1 => Place::NoticeBoard,
        2 => Place::Elder,
        3 => Place::ForestPath,
        _ => Place::Inventory,
    };
    engine.go_to(next);
    Ok(())
}

pub(super) fn tavern(engine: &mut Engine, console: &mut dyn Console) -> FictionResult<()> {
    enter(console, Place::Tavern)?;
    narrate(
        console,
        &[
            "Warmth, laughter, and the clink of mugs fill the tavern.",
            "A bard in the corner sings of distant lands and heroes long gone.",
            "At the bar, a figure in dark robes watches you without blinking.",
        ],
    )?;
    console.blank()?;
    narrate(
        console,
        &[
            "DECISION: The Mysterious Stranger",
            "The stranger slides onto the stool beside you.",
            "'I hold a map to an ancient temple full of treasure,' they murmur.",
            "'The road is dangerous and I need a partner. Interested?'",
        ],
    )?;
    console.blank()?;

    let choice = Menu::new()
        .with_option(format!("Accept the offer (requires {MAP_PRICE} gold)"))
        .with_option("Decline politely")
        .with_option("Ask for more details")
        .with_option("Return to village square")
        .ask(console)?;

    match choice {
        0 if engine.check(&Condition::GoldAtLeast(MAP_PRICE)) => {
            engine.apply(
                console,
                &[
                    Effect::Gold(-MAP_PRICE),
                    Effect::give(items::ANCIENT_MAP),
                    Effect::AcceptQuest(Quest::StrangersMap),
                ],
            )?;
            narrate(
                console,
                &[
                    "You count out the gold and receive a brittle, hand-drawn map.",
                    "'Find me at the forest's edge at dawn,' the stranger says.",
                ],
            )?;
            engine.go_to(Place::Start);
        }
        0 => {
            console.display_text("You don't have enough gold for this venture.")?;
            engine.go_to(Place::Start);
        }
        1 => {
            engine.apply(console, &[Effect::Reputation(5)])?;
            narrate(
                console,
                &[
                    "You decline politely. The stranger nods and slips away.",
                    "The villagers seem to approve of your caution.",
                ],
            )?;
            engine.go_to(Place::Start);
        }
        2 => {
            narrate(
                console,
                &[
                    "'The temple lies in the Darkwood, guarded by old traps and older creatures.'",
                    "'The reward could run to thousands of gold pieces...'",
                    "The stranger is clearly growing tired of your questions.",
                ],
            )?;
            engine.go_to(Place::Tavern);
        }
        _ => {
            engine.go_to(Place::Start);
        }
    }
    Ok(())
}

pub(super) fn notice_board(engine: &mut Engine, console: &mut dyn Console) -> FictionResult<()> {
    enter(console, Place::NoticeBoard)?;
    narrate(
        console,
        &[
            "Notices of every age are pinned to the weathered board.",
            "Available quests:",
            "- Hunt the wolves threatening the village (reward: 30 gold)",
            "- Gather rare herbs for the healer (reward: 15 gold and a healing potion)",
            "- Deliver a package to the next village (reward: 25 gold)",
        ],
    )?;
    console.blank()?;

    let choice = Menu::new()
        .with_option("Accept wolf hunting quest")
        .with_option("Accept herb gathering quest")
        .with_option("Accept delivery quest")
        .with_option("Return to village square")
        .ask(console)?;

    let (item, quest, lines): (&str, Quest, [&str; 2]) = match choice {
        0 => (
            items::WOLF_CONTRACT,
            Quest::WolfHunt,
            [
                "You pull the wolf hunting contract from the board.",
                "The village guard will lend you a weapon.",
            ],
        ),
        1 => (
            items::HERB_LIST,
            Quest::HerbGathering,
            [
                "You take the list of herbs.",
                "The healer's hut stands near the forest's edge.",
            ],
        ),
        2 => (
            items::DELIVERY_PACKAGE,
            Quest::Delivery,
            [
                "You take the package.",
                "It is addressed to someone in Stonebridge, a day's walk away.",
            ],
        ),
        _ => {
            engine.go_to(Place::Start);
            return Ok(());
        }
    };

    engine.apply(console, &[Effect::give(item), Effect::AcceptQuest(quest)])?;
    narrate(console, &lines)?;
    engine.go_to(Place::Start);
    Ok(())
}

pub(super) fn elder(engine: &mut Engine, console: &mut dyn Console) -> FictionResult<()> {
    enter(console, Place::Elder)?;
    narrate(
        console,
        &[
            "Books, scrolls, and curious artifacts crowd every shelf of the cottage.",
            "Elder Thorne sits by the fire, eyes bright with old knowledge.",
            "'A new face in Moonhaven,' the elder says. 'Perhaps you seek knowledge?'",
        ],
    )?;
    console.blank()?;

    let choice = Menu::new()
        .with_option("Ask about the village's history")
        .with_option("Inquire about local legends")
        .with_option("Seek advice for your journey")
        .with_option("Return to village square")
        .ask(console)?;

    match choice {
        0 => {
            narrate(
                console,
                &[
                    "'Moonhaven was founded by the Moonweaver family, blessed by the goddess Luna.'",
                    "'We have known peace for generations, but dark times may be coming...'",
                ],
            )?;
            engine.apply(console, &[Effect::Reputation(3)])?;
            engine.go_to(Place::Elder);
        }
        1 => {
            narrate(
                console,
                &[
                    "'Legends speak of the Crystal Caverns beneath the mountains.'",
                    "'Their crystals are said to grant visions of what is to come...'",
                ],
            )?;
            engine.apply(console, &[Effect::give(items::CAVERN_KNOWLEDGE)])?;
            engine.go_to(Place::Elder);
        }
        2 => {
            narrate(
                console,
                &[
                    "'Trust your instincts, but remember that not all that glitters is gold.'",
                    "'The greatest treasures often hide in unexpected places.'",
                ],
            )?;
            engine.apply(console, &[Effect::Reputation(5)])?;
            engine.go_to(Place::Elder);
        }
        _ => {
            engine.go_to(Place::Start);
        }
    }
    Ok(())
}

pub(super) fn inventory(engine: &mut Engine, console: &mut dyn Console) -> FictionResult<()> {
    enter(console, Place::Inventory)?;
    console.blank()?;

    let player = engine.player();
    if player.inventory().is_empty() {
        console.display_text("Your inventory is empty.")?;
    } else {
        for (i, item) in player.inventory().iter().enumerate() {
            console.display_text(&format!("{}. {item}", i + 1))?;
        }
    }

    let active: Vec<_> = player.quests().active().map(|q| q.name()).collect();
    if !active.is_empty() {
        console.blank()?;
        console.display_text(&format!("Active quests: {}", active.join(", ")))?;
    }
    if !player.completed_quests().is_empty() {
        console.display_text(&format!(
            "Completed quests: {}",
            player.completed_quests().join(", ")
        ))?;
    }

    console.blank()?;
    console.show_status(player)?;

    console.prompt_choice("Press Enter to return to village square...", None)?;
    engine.go_to(Place::Start);
    Ok(())
}
