//! Configuration for a navigation engine.

use crate::location::Location;

/// Configuration for a [`NavigationEngine`](crate::NavigationEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig<L: Location> {
    /// Where the run loop begins when nothing has been navigated to yet.
    pub start: L,
    /// Treat navigation to an unregistered location as a fatal error.
    ///
    /// Defaults to on in debug builds and off in release builds, where the
    /// failed navigation is only logged and the player stays put.
    pub strict_navigation: bool,
    /// Stop the run loop after this many scene invocations.
    pub max_steps: Option<u64>,
}

impl<L: Location> EngineConfig<L> {
    /// Create a config starting at `start`.
    pub fn new(start: L) -> Self {
        Self {
            start,
            strict_navigation: cfg!(debug_assertions),
            max_steps: None,
        }
    }

    /// Set the start location.
    pub fn with_start(mut self, start: L) -> Self {
        self.start = start;
        self
    }

    /// Set strict navigation.
    pub fn with_strict_navigation(mut self, strict: bool) -> Self {
        self.strict_navigation = strict;
        self
    }

    /// Bound the run loop. Zero is treated as one step.
    pub fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps.max(1));
        self
    }
}
