//! The I/O collaborator contract.
//!
//! The engine never touches stdin or stdout. Scene handlers render text and
//! collect choices through a [`Console`]; the binary supplies a terminal
//! implementation and tests use [`ScriptedConsole`].

use std::collections::VecDeque;

use eldria_core::{PlayerState, StateChange};

use crate::error::{FictionError, FictionResult};

/// Presentation layer used by scene handlers.
pub trait Console {
    /// Render narrative text. The text must be fully shown before returning.
    fn show(&mut self, text: &str) -> FictionResult<()>;

    /// Read one line of input after displaying `prompt`.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> FictionResult<Option<String>>;

    /// Render a snapshot of the player's stats and inventory.
    fn show_status(&mut self, player: &PlayerState) -> FictionResult<()>;

    /// Tell the player about a change to their state.
    fn report(&mut self, change: &StateChange) -> FictionResult<()>;

    /// Clear the screen between scenes.
    fn clear(&mut self) -> FictionResult<()>;

    /// Render narrative text.
    fn display_text(&mut self, text: &str) -> FictionResult<()> {
        self.show(text)
    }

    /// Render an empty line.
    fn blank(&mut self) -> FictionResult<()> {
        self.show("")
    }

    /// Tell the player their input was not one of the allowed options.
    fn reject(&mut self, allowed: &[&str]) -> FictionResult<()> {
        self.show(&format!("Please choose from: {}", allowed.join(", ")))
    }

    /// Prompt until the player enters an allowed option.
    ///
    /// Input is trimmed and lowercased. With `allowed` set to `None` any line
    /// is accepted. End of input yields [`FictionError::Interrupted`].
    fn prompt_choice(&mut self, prompt: &str, allowed: Option<&[&str]>) -> FictionResult<String> {
        loop {
            let line = self.read_line(prompt)?.ok_or(FictionError::Interrupted)?;
            let input = line.trim().to_lowercase();

            match allowed {
                None => return Ok(input),
                Some(options) if options.contains(&input.as_str()) => return Ok(input),
                Some(options) => {
                    tracing::debug!(input = %input, "rejected out-of-menu input");
                    self.reject(options)?;
                }
            }
        }
    }

    /// Prompt for a freeform line, returned trimmed but with case preserved.
    fn ask(&mut self, prompt: &str) -> FictionResult<String> {
        let line = self.read_line(prompt)?.ok_or(FictionError::Interrupted)?;
        Ok(line.trim().to_string())
    }
}

/// Something a [`ScriptedConsole`] was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// Narrative text.
    Text(String),
    /// An input prompt.
    Prompt(String),
    /// A status snapshot.
    Status(PlayerState),
    /// A state-change report.
    Report(StateChange),
    /// A screen clear.
    Clear,
}

/// A console fed from pre-recorded input that records everything shown.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<ConsoleEvent>,
}

impl ScriptedConsole {
    /// Create a console that answers prompts with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Input lines not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// Everything recorded so far.
    pub fn transcript(&self) -> &[ConsoleEvent] {
        &self.transcript
    }

    /// All narrative text, one line per [`ConsoleEvent::Text`].
    pub fn text(&self) -> String {
        self.transcript
            .iter()
            .filter_map(|e| match e {
                ConsoleEvent::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All reports, in order.
    pub fn reports(&self) -> Vec<&StateChange> {
        self.transcript
            .iter()
            .filter_map(|e| match e {
                ConsoleEvent::Report(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    /// Forget the transcript but keep pending input.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) -> FictionResult<()> {
        self.transcript.push(ConsoleEvent::Text(text.to_string()));
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> FictionResult<Option<String>> {
        self.transcript.push(ConsoleEvent::Prompt(prompt.to_string()));
        Ok(self.input.pop_front())
    }

    fn show_status(&mut self, player: &PlayerState) -> FictionResult<()> {
        self.transcript.push(ConsoleEvent::Status(player.clone()));
        Ok(())
    }

    fn report(&mut self, change: &StateChange) -> FictionResult<()> {
        self.transcript.push(ConsoleEvent::Report(change.clone()));
        Ok(())
    }

    fn clear(&mut self) -> FictionResult<()> {
        self.transcript.push(ConsoleEvent::Clear);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_choice_accepts_allowed_option() {
        let mut console = ScriptedConsole::new(["2"]);
        let choice = console.prompt_choice("Choice:", Some(&["1", "2"])).unwrap();
        assert_eq!(choice, "2");
    }

    #[test]
    fn prompt_choice_reprompts_on_invalid_input() {
        let mut console = ScriptedConsole::new(["7", "banana", " 1 "]);
        let choice = console.prompt_choice("Choice:", Some(&["1", "2"])).unwrap();

        assert_eq!(choice, "1");
        assert_eq!(console.remaining_input(), 0);
        let prompts = console
            .transcript()
            .iter()
            .filter(|e| matches!(e, ConsoleEvent::Prompt(_)))
            .count();
        assert_eq!(prompts, 3);
        assert!(console.text().contains("Please choose from: 1, 2"));
    }

    #[test]
    fn prompt_choice_normalizes_case() {
        let mut console = ScriptedConsole::new(["Y"]);
        let choice = console.prompt_choice("Buy? (y/n):", Some(&["y", "n"])).unwrap();
        assert_eq!(choice, "y");
    }

    #[test]
    fn prompt_choice_without_options_accepts_anything() {
        let mut console = ScriptedConsole::new([""]);
        let choice = console.prompt_choice("Press Enter...", None).unwrap();
        assert_eq!(choice, "");
    }

    #[test]
    fn end_of_input_is_interrupted() {
        let mut console = ScriptedConsole::new(["9"]);
        let err = console
            .prompt_choice("Choice:", Some(&["1"]))
            .unwrap_err();
        assert!(matches!(err, FictionError::Interrupted));
    }

    #[test]
    fn ask_preserves_case() {
        let mut console = ScriptedConsole::new(["  Aria Moonweaver "]);
        assert_eq!(console.ask("Name?").unwrap(), "Aria Moonweaver");
    }

    #[test]
    fn transcript_records_reports_and_status() {
        let mut console = ScriptedConsole::default();
        let player = PlayerState::new();
        console.show_status(&player).unwrap();
        console.report(&StateChange::Gold(5)).unwrap();
        console.clear().unwrap();

        assert_eq!(console.transcript().len(), 3);
        assert_eq!(console.reports(), vec![&StateChange::Gold(5)]);

        console.clear_transcript();
        assert!(console.transcript().is_empty());
    }
}
