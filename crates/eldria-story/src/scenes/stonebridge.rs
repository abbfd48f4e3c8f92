//! Stonebridge, the market town past the forest.

use eldria_fiction::{Condition, Console, Effect, FictionResult, Menu};

use super::{Engine, enter, narrate};
use crate::items;
use crate::place::Place;

const POTION_PRICE: i32 = 10;
const INN_REST: i32 = 20;

pub(super) fn stonebridge(engine: &mut Engine, console: &mut dyn Console) -> FictionResult<()> {
    enter(console, Place::Stonebridge)?;
    narrate(
        console,
        &[
            "Stonebridge is a larger village, known for its stonework and busy market.",
            "Merchants call out their wares over the smell of fresh bread.",
        ],
    )?;
    console.blank()?;

    let choice = Menu::new()
        .with_option("Visit the market")
        .with_option("Check the local inn")
        .with_option("Return to Moonhaven")
        .ask(console)?;

    match choice {
        0 => {
            console.display_text("Stalls and merchants crowd the market square.")?;
            if engine.check(&Condition::GoldAtLeast(POTION_PRICE)) {
                let buy = console.prompt_choice(
                    &format!("Would you like to buy a healing potion for {POTION_PRICE} gold? (y/n):"),
                    Some(&["y", "n"]),
                )?;
                if buy == "y" {
                    engine.apply(
                        console,
                        &[
                            Effect::Gold(-POTION_PRICE),
                            Effect::give(items::HEALING_POTION),
                        ],
                    )?;
                }
            }
            engine.go_to(Place::Stonebridge);
        }
        1 => {
            narrate(
                console,
                &[
                    "The inn is warm and welcoming.",
                    "You rest a while and wake refreshed.",
                ],
            )?;
            engine.apply(console, &[Effect::Health(INN_REST)])?;
            engine.go_to(Place::Stonebridge);
        }
        _ => {
            engine.go_to(Place::Start);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_engine, default_config};
    use eldria_fiction::ScriptedConsole;

    fn at_stonebridge() -> Engine {
        let mut engine = build_engine(default_config());
        assert!(engine.go_to(Place::Stonebridge));
        engine
    }

    #[test]
    fn buy_potion() {
        let mut engine = at_stonebridge();
        let mut console = ScriptedConsole::new(["1", "y"]);
        engine.step(&mut console).unwrap();

        assert_eq!(engine.player().gold(), 40);
        assert!(engine.player().has_item(items::HEALING_POTION));
        assert_eq!(engine.current_location(), Some(Place::Stonebridge));
    }

    #[test]
    fn decline_potion() {
        let mut engine = at_stonebridge();
        let mut console = ScriptedConsole::new(["1", "maybe", "N"]);
        engine.step(&mut console).unwrap();

        assert_eq!(engine.player().gold(), 50);
        assert!(engine.player().inventory().is_empty());
        assert!(console.text().contains("Please choose from: y, n"));
    }

    #[test]
    fn broke_players_are_not_offered_potions() {
        let mut engine = at_stonebridge();
        engine.player_mut().modify_gold(-45);
        let mut console = ScriptedConsole::new(["1", "y"]);
        engine.step(&mut console).unwrap();

        assert_eq!(engine.player().gold(), 5);
        assert_eq!(console.remaining_input(), 1);
    }

    #[test]
    fn inn_heals() {
        let mut engine = at_stonebridge();
        engine.player_mut().modify_health(-30);
        let mut console = ScriptedConsole::new(["2"]);
        engine.step(&mut console).unwrap();

        assert_eq!(engine.player().health(), 90);
    }

    #[test]
    fn return_home() {
        let mut engine = at_stonebridge();
        let mut console = ScriptedConsole::new(["3"]);
        engine.step(&mut console).unwrap();
        assert_eq!(engine.current_location(), Some(Place::Start));
    }
}
