//! Verify that every location has a scene.

use eldria_fiction::Location;
use eldria_story::{Place, build_engine, default_config};

pub fn run() -> Result<(), String> {
    let engine = build_engine(default_config());
    let missing = engine.unregistered();

    if missing.is_empty() {
        println!("  All {} locations have scenes.", Place::ALL.len());
        return Ok(());
    }

    let keys: Vec<_> = missing.iter().map(|p| p.key()).collect();
    Err(format!("locations without a scene: {}", keys.join(", ")))
}
