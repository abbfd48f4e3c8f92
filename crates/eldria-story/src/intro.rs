//! The opening sequence.

use eldria_fiction::{Console, FictionResult};

/// Name used when the player gives none.
pub const DEFAULT_NAME: &str = "Brave Adventurer";

const BANNER: &str = "THE LOST REALMS OF ELDRIA";

/// Greet the player and learn their name.
///
/// If `name` is given the name prompt is skipped. A blank answer falls back
/// to [`DEFAULT_NAME`]. Returns the name used.
pub fn intro(console: &mut dyn Console, name: Option<&str>) -> FictionResult<String> {
    console.clear()?;
    console.show(&"=".repeat(40))?;
    console.show(&format!("{BANNER:^40}"))?;
    console.show(&"=".repeat(40))?;
    console.blank()?;

    for line in [
        "Welcome, adventurer. You have arrived in Eldria, a realm where magic runs like rivers.",
        "Old secrets sleep in its shadows, waiting for someone bold enough to wake them.",
        "Your road begins in the quiet village of Moonhaven, but fate has larger plans.",
    ] {
        console.display_text(line)?;
    }
    console.blank()?;

    let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(given) => given.to_string(),
        None => {
            let answer = console.ask("What is your name, traveler?")?;
            if answer.is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                answer
            }
        }
    };
    tracing::info!(player = %name, "adventure begins");

    console.display_text(&format!("Ah, {name}! The stars foretold your arrival..."))?;
    console.display_text("Choose wisely, for every decision shapes your destiny.")?;
    console.blank()?;

    console.ask("Press Enter to begin your journey...")?;
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eldria_fiction::{ConsoleEvent, FictionError, ScriptedConsole};

    #[test]
    fn asks_for_name() {
        let mut console = ScriptedConsole::new(["Aria", ""]);
        let name = intro(&mut console, None).unwrap();

        assert_eq!(name, "Aria");
        assert!(console.text().contains("Ah, Aria!"));
        assert_eq!(console.remaining_input(), 0);
    }

    #[test]
    fn blank_name_uses_default() {
        let mut console = ScriptedConsole::new(["   ", ""]);
        let name = intro(&mut console, None).unwrap();
        assert_eq!(name, DEFAULT_NAME);
    }

    #[test]
    fn given_name_skips_prompt() {
        let mut console = ScriptedConsole::new([""]);
        let name = intro(&mut console, Some("Kael")).unwrap();

        assert_eq!(name, "Kael");
        let prompts: Vec<_> = console
            .transcript()
            .iter()
            .filter_map(|e| match e {
                ConsoleEvent::Prompt(p) => Some(p.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(prompts, vec!["Press Enter to begin your journey..."]);
    }

    #[test]
    fn end_of_input_during_intro() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let err = intro(&mut console, None).unwrap_err();
        assert!(matches!(err, FictionError::Interrupted));
    }
}
