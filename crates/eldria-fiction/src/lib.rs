//! Navigation engine for menu-driven interactive fiction.
//!
//! A game is a set of named locations, each bound to a scene handler. The
//! [`NavigationEngine`] owns the player's state and the registry, and its run
//! loop keeps invoking the handler of the current location. Handlers talk to
//! the player only through the [`Console`] collaborator, mutate state through
//! [`Effect`]s, and pick the next location with [`NavigationEngine::go_to`].

/// Menus, effects, and conditions used by scene handlers.
pub mod choice;
/// Engine configuration.
pub mod config;
/// The I/O collaborator contract.
pub mod console;
/// The location registry and run loop.
pub mod engine;
/// Error types for the engine.
pub mod error;
/// Location identifiers.
pub mod location;

/// Re-export choice types.
pub use choice::{Condition, Effect, Menu};
/// Re-export the engine configuration.
pub use config::EngineConfig;
/// Re-export console types.
pub use console::{Console, ConsoleEvent, ScriptedConsole};
/// Re-export engine types.
pub use engine::{NavigationEngine, RunSummary, SceneFn, StopReason};
/// Re-export error types.
pub use error::{FictionError, FictionResult};
/// Re-export the location trait.
pub use location::Location;
