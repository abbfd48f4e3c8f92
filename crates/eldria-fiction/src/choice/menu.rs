//! Numbered choice menus.

use crate::console::Console;
use crate::error::{FictionError, FictionResult};

/// Option keys, enough for any menu a scene shows.
const KEYS: [&str; 9] = ["1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A numbered menu of options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    heading: Option<String>,
    options: Vec<String>,
}

impl Menu {
    /// Create an empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Add an option.
    ///
    /// Menus hold at most nine options; extra options are ignored with a
    /// warning since no single key can select them.
    pub fn with_option(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if self.options.len() >= KEYS.len() {
            tracing::warn!(label = %label, "menu is full, option dropped");
            return self;
        }
        self.options.push(label);
        self
    }

    /// Heading shown above the options, if any.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Option labels in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The prompt text: one numbered line per option, then `Choice:`.
    pub fn prompt(&self) -> String {
        let mut out = String::new();
        if let Some(heading) = &self.heading {
            out.push_str(heading);
            out.push('\n');
        }
        for (i, option) in self.options.iter().enumerate() {
            out.push_str(&format!("{}. {option}\n", i + 1));
        }
        out.push_str("Choice:");
        out
    }

    /// Keys accepted by this menu.
    pub fn keys(&self) -> &'static [&'static str] {
        &KEYS[..self.options.len().min(KEYS.len())]
    }

    /// Show the menu and return the zero-based index of the chosen option.
    ///
    /// Fails with [`FictionError::EmptyMenu`] if there is nothing to choose.
    pub fn ask(&self, console: &mut dyn Console) -> FictionResult<usize> {
        if self.options.is_empty() {
            return Err(FictionError::EmptyMenu);
        }
        let answer = console.prompt_choice(&self.prompt(), Some(self.keys()))?;
        let index = self
            .keys()
            .iter()
            .position(|k| *k == answer)
            .unwrap_or_default();
        Ok(index)
    }
}
