//! The Lost Realms of Eldria.
//!
//! Nine locations around the village of Moonhaven, each a scene handler for
//! the [`eldria_fiction`] navigation engine. [`build_engine`] wires them all
//! up; [`intro`] greets the player before the loop starts.

/// The opening sequence.
pub mod intro;
/// Item names used across scenes.
pub mod items;
/// Location identifiers.
pub mod place;
/// Scene handlers.
pub mod scenes;

/// Re-export the opening sequence.
pub use intro::{DEFAULT_NAME, intro};
/// Re-export the location enum.
pub use place::Place;

use eldria_fiction::{EngineConfig, NavigationEngine};

/// The default engine configuration: start in Moonhaven village.
pub fn default_config() -> EngineConfig<Place> {
    EngineConfig::new(Place::Start)
}

/// Build an engine with every scene registered.
pub fn build_engine(config: EngineConfig<Place>) -> NavigationEngine<Place> {
    let mut engine = NavigationEngine::new(config);
    scenes::register_all(&mut engine);
    tracing::debug!(
        locations = engine.registered().len(),
        "Eldria scenes registered"
    );
    engine
}
