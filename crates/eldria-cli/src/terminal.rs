//! Console implementation on top of stdin and stdout.

use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use eldria_core::{MAX_HEALTH, PlayerState, StateChange};
use eldria_fiction::{Console, FictionResult};

const RULE_WIDTH: usize = 50;

/// Write the closing line shown when the player leaves.
pub fn write_farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n\n{}", "Thanks for playing! Goodbye!".bold())?;
    out.flush()
}

/// How narrative text is revealed.
#[derive(Debug, Clone, Copy)]
pub struct TypingConfig {
    /// Pause after each character.
    pub delay: Duration,
    /// Whether to type at all; when off text appears at once.
    pub enabled: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(30),
            enabled: true,
        }
    }
}

impl TypingConfig {
    /// Set the per-character delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Turn the typing effect on or off.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    fn active(&self) -> bool {
        self.enabled && !self.delay.is_zero()
    }
}

/// A [`Console`] reading lines from `R` and writing to `W`.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    typing: TypingConfig,
    interactive: bool,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's stdin and stdout.
    ///
    /// Typing and screen clearing only happen when stdout is a terminal.
    pub fn stdio(typing: TypingConfig) -> Self {
        let stdout = io::stdout();
        let interactive = stdout.is_terminal();
        Self::new(io::stdin().lock(), stdout, typing, interactive)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Console on arbitrary streams.
    pub fn new(input: R, output: W, typing: TypingConfig, interactive: bool) -> Self {
        Self {
            input,
            output,
            typing,
            interactive,
        }
    }

    /// Say goodbye.
    pub fn farewell(&mut self) -> FictionResult<()> {
        write_farewell(&mut self.output)?;
        Ok(())
    }

    /// Write a plain line.
    pub fn line(&mut self, text: &str) -> FictionResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn type_out(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            write!(self.output, "{ch}")?;
            self.output.flush()?;
            thread::sleep(self.typing.delay);
        }
        writeln!(self.output)
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn show(&mut self, text: &str) -> FictionResult<()> {
        if self.interactive && self.typing.active() {
            self.type_out(text)?;
        } else {
            writeln!(self.output, "{text}")?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> FictionResult<Option<String>> {
        write!(self.output, "\n{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_status(&mut self, player: &PlayerState) -> FictionResult<()> {
        let inventory = if player.inventory().is_empty() {
            "Empty".to_string()
        } else {
            player.inventory().join(", ")
        };

        writeln!(self.output, "\n{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            self.output,
            "{} {}/{MAX_HEALTH}",
            "Health:".bold(),
            player.health()
        )?;
        writeln!(self.output, "{} {}", "Gold:".bold(), player.gold())?;
        writeln!(self.output, "{} {}", "Reputation:".bold(), player.reputation())?;
        writeln!(self.output, "{} {inventory}", "Inventory:".bold())?;
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn report(&mut self, change: &StateChange) -> FictionResult<()> {
        let text = change.to_string();
        let styled = if change.is_gain() {
            text.green()
        } else {
            text.red()
        };
        writeln!(self.output, "  {styled}")?;
        Ok(())
    }

    fn clear(&mut self) -> FictionResult<()> {
        if self.interactive {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn reject(&mut self, allowed: &[&str]) -> FictionResult<()> {
        let text = format!("Please choose from: {}", allowed.join(", "));
        writeln!(self.output, "{}", text.yellow())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eldria_fiction::FictionError;

    fn console(input: &str) -> TerminalConsole<&[u8], Vec<u8>> {
        colored::control::set_override(false);
        TerminalConsole::new(input.as_bytes(), Vec::new(), TypingConfig::default(), false)
    }

    fn output(console: &TerminalConsole<&[u8], Vec<u8>>) -> String {
        String::from_utf8_lossy(&console.output).into_owned()
    }

    #[test]
    fn reads_lines_until_eof() {
        let mut console = console("first\r\nsecond\n");
        assert_eq!(console.read_line(">").unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line(">").unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line(">").unwrap(), None);
        assert!(output(&console).contains("\n> "));
    }

    #[test]
    fn reprompts_with_allowed_options() {
        let mut console = console("9\n2\n");
        let choice = console.prompt_choice("Choice:", Some(&["1", "2"])).unwrap();
        assert_eq!(choice, "2");
        assert!(output(&console).contains("Please choose from: 1, 2"));
    }

    #[test]
    fn end_of_input_interrupts_prompt() {
        let mut console = console("");
        let err = console.prompt_choice("Choice:", None).unwrap_err();
        assert!(matches!(err, FictionError::Interrupted));
    }

    #[test]
    fn status_box() {
        let mut console = console("");
        let mut player = PlayerState::new();
        player.add_item("Ancient Map");
        player.add_item("Healing Potion");
        console.show_status(&player).unwrap();

        let out = output(&console);
        assert!(out.contains("Health: 100/100"));
        assert!(out.contains("Gold: 50"));
        assert!(out.contains("Reputation: 0"));
        assert!(out.contains("Inventory: Ancient Map, Healing Potion"));
    }

    #[test]
    fn empty_inventory_in_status() {
        let mut console = console("");
        console.show_status(&PlayerState::new()).unwrap();
        assert!(output(&console).contains("Inventory: Empty"));
    }

    #[test]
    fn reports_and_text() {
        let mut console = console("");
        console.report(&StateChange::Gold(-20)).unwrap();
        console.show("The tavern is warm.").unwrap();
        console.clear().unwrap();
        console.farewell().unwrap();

        let out = output(&console);
        assert!(out.contains("  Lost 20 gold\n"));
        assert!(out.contains("The tavern is warm.\n"));
        assert!(out.contains("Thanks for playing! Goodbye!"));
    }

    #[test]
    fn typing_config_builder() {
        let typing = TypingConfig::default()
            .with_delay(Duration::ZERO)
            .with_enabled(true);
        assert!(!typing.active());
        assert!(TypingConfig::default().active());
        assert!(!TypingConfig::default().with_enabled(false).active());
    }
}
