//! The location registry and run loop.

use std::collections::HashMap;

use eldria_core::PlayerState;

use crate::choice::{Condition, Effect};
use crate::config::EngineConfig;
use crate::console::Console;
use crate::error::{FictionError, FictionResult};
use crate::location::Location;

/// A scene handler.
///
/// Handlers render their scene, read the player's choice, mutate state, and
/// end with exactly one [`NavigationEngine::go_to`] (calling it with the
/// current location re-displays the same scene).
pub type SceneFn<L> = fn(&mut NavigationEngine<L>, &mut dyn Console) -> FictionResult<()>;

/// Why the run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Input ended; the player left.
    Interrupted,
    /// A handler called [`NavigationEngine::stop`].
    Stopped,
    /// The configured step limit was reached.
    StepLimit,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary<L> {
    /// Scene invocations over the engine's lifetime.
    pub steps: u64,
    /// Distinct locations entered at least once.
    pub locations_visited: usize,
    /// Where the player was when the loop ended.
    pub final_location: Option<L>,
    /// Why the loop ended.
    pub reason: StopReason,
}

/// Owns the player and the location registry, and drives the game loop.
#[derive(Debug)]
pub struct NavigationEngine<L: Location> {
    player: PlayerState,
    locations: HashMap<L, SceneFn<L>>,
    current: Option<L>,
    active: Option<SceneFn<L>>,
    running: bool,
    config: EngineConfig<L>,
    steps: u64,
    visits: HashMap<L, u64>,
    navigation_fault: Option<L>,
}

impl<L: Location> NavigationEngine<L> {
    /// Create an engine with a fresh player and an empty registry.
    pub fn new(config: EngineConfig<L>) -> Self {
        Self {
            player: PlayerState::new(),
            locations: HashMap::new(),
            current: None,
            active: None,
            running: false,
            config,
            steps: 0,
            visits: HashMap::new(),
            navigation_fault: None,
        }
    }

    /// Bind `handler` to `id`, replacing any previous binding.
    pub fn register_location(&mut self, id: L, handler: SceneFn<L>) {
        if self.locations.insert(id, handler).is_some() {
            tracing::warn!(location = id.key(), "scene handler replaced");
        }
        if self.current == Some(id) {
            self.active = Some(handler);
        }
    }

    /// Builder form of [`register_location`](Self::register_location).
    pub fn with_location(mut self, id: L, handler: SceneFn<L>) -> Self {
        self.register_location(id, handler);
        self
    }

    /// Move to `id`.
    ///
    /// Returns `false` and leaves the engine unchanged if `id` has no
    /// registered scene. The failure is logged; with strict navigation the
    /// current [`step`](Self::step) also fails with
    /// [`FictionError::UnknownLocation`].
    pub fn go_to(&mut self, id: L) -> bool {
        let Some(handler) = self.locations.get(&id).copied() else {
            tracing::error!(
                target_location = id.key(),
                from = self.current.map(Location::key),
                "navigation to unregistered location ignored"
            );
            if self.config.strict_navigation {
                self.navigation_fault.get_or_insert(id);
            }
            return false;
        };

        tracing::debug!(
            from = self.current.map(Location::key),
            to = id.key(),
            "navigate"
        );
        self.current = Some(id);
        self.active = Some(handler);
        *self.visits.entry(id).or_default() += 1;
        true
    }

    /// Run one iteration of the loop.
    ///
    /// Before the first navigation this moves to the configured start
    /// location without invoking any scene; afterwards it invokes the scene
    /// of the current location exactly once.
    pub fn step(&mut self, console: &mut dyn Console) -> FictionResult<()> {
        let Some(handler) = self.active else {
            let start = self.config.start;
            if self.go_to(start) {
                return Ok(());
            }
            self.navigation_fault = None;
            return Err(FictionError::UnknownLocation(start.key().to_string()));
        };

        self.steps += 1;
        let result = handler(self, console);
        let fault = self.navigation_fault.take();
        result?;

        match fault {
            Some(target) => Err(FictionError::UnknownLocation(target.key().to_string())),
            None => Ok(()),
        }
    }

    /// Run the loop until a handler stops it, input ends, or the step limit
    /// is reached.
    ///
    /// End of input is a normal exit, not an error.
    pub fn run(&mut self, console: &mut dyn Console) -> FictionResult<RunSummary<L>> {
        self.running = true;
        let mut reason = StopReason::Stopped;
        tracing::info!(start = self.config.start.key(), "game loop started");

        while self.running {
            if self.config.max_steps.is_some_and(|max| self.steps >= max) {
                tracing::info!(steps = self.steps, "step limit reached");
                reason = StopReason::StepLimit;
                break;
            }

            match self.step(console) {
                Ok(()) => {}
                Err(FictionError::Interrupted) => {
                    tracing::info!("input closed, leaving the game loop");
                    reason = StopReason::Interrupted;
                    break;
                }
                Err(e) => {
                    self.running = false;
                    return Err(e);
                }
            }
        }

        self.running = false;
        Ok(RunSummary {
            steps: self.steps,
            locations_visited: self.visits.len(),
            final_location: self.current,
            reason,
        })
    }

    /// Ask the loop to end after the current scene.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Apply effects in order, reporting each change to the console.
    pub fn apply(&mut self, console: &mut dyn Console, effects: &[Effect]) -> FictionResult<()> {
        for effect in effects {
            if let Some(change) = effect.apply(&mut self.player) {
                tracing::debug!(?change, "state changed");
                console.report(&change)?;
            }
        }
        Ok(())
    }

    /// Evaluate a condition against the player.
    pub fn check(&self, condition: &Condition) -> bool {
        condition.evaluate(&self.player)
    }

    /// The player's state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable access to the player's state.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// The current location, or `None` before the first navigation.
    pub fn current_location(&self) -> Option<L> {
        self.current
    }

    /// Whether the run loop is active.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig<L> {
        &self.config
    }

    /// Whether `id` has a scene.
    pub fn is_registered(&self, id: L) -> bool {
        self.locations.contains_key(&id)
    }

    /// Locations with a scene, in [`Location::ALL`] order.
    pub fn registered(&self) -> Vec<L> {
        L::ALL
            .iter()
            .copied()
            .filter(|l| self.is_registered(*l))
            .collect()
    }

    /// Locations without a scene, in [`Location::ALL`] order.
    pub fn unregistered(&self) -> Vec<L> {
        L::ALL
            .iter()
            .copied()
            .filter(|l| !self.is_registered(*l))
            .collect()
    }

    /// Scene invocations so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// How many times the player has entered `id`.
    pub fn visits(&self, id: L) -> u64 {
        self.visits.get(&id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Menu;
    use crate::console::ScriptedConsole;
    use crate::location::tests::Room;
    use eldria_core::StateChange;

    fn lenient() -> EngineConfig<Room> {
        EngineConfig::new(Room::Hall).with_strict_navigation(false)
    }

    fn strict() -> EngineConfig<Room> {
        EngineConfig::new(Room::Hall).with_strict_navigation(true)
    }

    fn hall(engine: &mut NavigationEngine<Room>, console: &mut dyn Console) -> FictionResult<()> {
        console.show("You are in the hall.")?;
        let choice = Menu::new()
            .with_option("Go down")
            .with_option("Go up")
            .with_option("Stay")
            .ask(console)?;
        match choice {
            0 => engine.go_to(Room::Cellar),
            1 => engine.go_to(Room::Attic),
            _ => engine.go_to(Room::Hall),
        };
        Ok(())
    }

    fn cellar(engine: &mut NavigationEngine<Room>, console: &mut dyn Console) -> FictionResult<()> {
        engine.apply(console, &[Effect::Gold(10), Effect::give("Lantern")])?;
        engine.go_to(Room::Hall);
        Ok(())
    }

    fn attic(engine: &mut NavigationEngine<Room>, console: &mut dyn Console) -> FictionResult<()> {
        console.show("Dust everywhere. You leave.")?;
        engine.stop();
        Ok(())
    }

    fn house(config: EngineConfig<Room>) -> NavigationEngine<Room> {
        NavigationEngine::new(config)
            .with_location(Room::Hall, hall)
            .with_location(Room::Cellar, cellar)
            .with_location(Room::Attic, attic)
    }

    #[test]
    fn new_engine_has_not_started() {
        let engine = house(lenient());
        assert_eq!(engine.current_location(), None);
        assert!(!engine.is_running());
        assert_eq!(engine.steps(), 0);
        assert_eq!(engine.player().gold(), 50);
    }

    #[test]
    fn go_to_registered_location() {
        let mut engine = house(lenient());
        assert!(engine.go_to(Room::Cellar));
        assert_eq!(engine.current_location(), Some(Room::Cellar));
        assert_eq!(engine.visits(Room::Cellar), 1);
    }

    #[test]
    fn go_to_unregistered_location_changes_nothing() {
        for config in [lenient(), strict()] {
            let mut engine = NavigationEngine::new(config).with_location(Room::Hall, hall);
            assert!(engine.go_to(Room::Hall));

            assert!(!engine.go_to(Room::Attic));
            assert_eq!(engine.current_location(), Some(Room::Hall));
            assert_eq!(engine.visits(Room::Attic), 0);
        }
    }

    #[test]
    fn first_step_moves_to_start() {
        let mut engine = house(lenient());
        let mut console = ScriptedConsole::default();

        engine.step(&mut console).unwrap();
        assert_eq!(engine.current_location(), Some(Room::Hall));
        assert_eq!(engine.steps(), 0);
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn unregistered_start_is_an_error() {
        let mut engine = NavigationEngine::new(lenient()).with_location(Room::Cellar, cellar);
        let mut console = ScriptedConsole::default();

        let err = engine.step(&mut console).unwrap_err();
        assert!(matches!(err, FictionError::UnknownLocation(ref key) if key == "hall"));
    }

    #[test]
    fn run_until_input_ends() {
        let mut engine = house(lenient());
        let mut console = ScriptedConsole::new(["1", "3"]);

        let summary = engine.run(&mut console).unwrap();

        // hall -> cellar -> hall -> hall (stay) -> input ends in the hall
        assert_eq!(summary.reason, StopReason::Interrupted);
        assert_eq!(summary.final_location, Some(Room::Hall));
        assert_eq!(summary.steps, 4);
        assert_eq!(summary.locations_visited, 2);
        assert!(!engine.is_running());
        assert_eq!(engine.player().gold(), 60);
        assert!(engine.player().has_item("Lantern"));
        assert_eq!(
            console.reports(),
            vec![
                &StateChange::Gold(10),
                &StateChange::ItemAcquired("Lantern".into())
            ]
        );
    }

    #[test]
    fn handler_can_stop_the_loop() {
        let mut engine = house(lenient());
        let mut console = ScriptedConsole::new(["2"]);

        let summary = engine.run(&mut console).unwrap();
        assert_eq!(summary.reason, StopReason::Stopped);
        assert_eq!(summary.final_location, Some(Room::Attic));
        assert_eq!(console.remaining_input(), 0);
    }

    #[test]
    fn step_limit_bounds_the_loop() {
        let mut engine = house(lenient().with_max_steps(3));
        let mut console = ScriptedConsole::new(["3"; 10]);

        let summary = engine.run(&mut console).unwrap();
        assert_eq!(summary.reason, StopReason::StepLimit);
        assert_eq!(summary.steps, 3);
        assert_eq!(console.remaining_input(), 7);
    }

    #[test]
    fn strict_navigation_fails_the_step() {
        let mut engine = NavigationEngine::new(strict()).with_location(Room::Hall, hall);
        let mut console = ScriptedConsole::new(["1"]);

        let err = engine.run(&mut console).unwrap_err();
        assert!(matches!(err, FictionError::UnknownLocation(ref key) if key == "cellar"));
        assert_eq!(engine.current_location(), Some(Room::Hall));
        assert!(!engine.is_running());
    }

    #[test]
    fn lenient_navigation_stays_put() {
        let mut engine = NavigationEngine::new(lenient()).with_location(Room::Hall, hall);
        let mut console = ScriptedConsole::new(["1", "1"]);

        let summary = engine.run(&mut console).unwrap();
        assert_eq!(summary.reason, StopReason::Interrupted);
        assert_eq!(summary.final_location, Some(Room::Hall));
        assert_eq!(summary.steps, 3);
    }

    #[test]
    fn registry_listing() {
        let engine = NavigationEngine::new(lenient())
            .with_location(Room::Attic, attic)
            .with_location(Room::Hall, hall);

        assert_eq!(engine.registered(), vec![Room::Hall, Room::Attic]);
        assert_eq!(engine.unregistered(), vec![Room::Cellar]);
        assert!(engine.is_registered(Room::Attic));
    }

    #[test]
    fn re_registering_current_location_swaps_active_scene() {
        let mut engine = house(lenient());
        engine.go_to(Room::Hall);
        engine.register_location(Room::Hall, attic);

        let mut console = ScriptedConsole::default();
        engine.step(&mut console).unwrap();
        assert!(console.text().contains("Dust everywhere"));
    }

    #[test]
    fn check_conditions_against_player() {
        let mut engine = house(lenient());
        assert!(engine.check(&Condition::GoldAtLeast(50)));
        engine.player_mut().modify_gold(-1);
        assert!(!engine.check(&Condition::GoldAtLeast(50)));
    }
}
