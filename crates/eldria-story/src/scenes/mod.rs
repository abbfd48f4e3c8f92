//! Scene handlers, one per [`Place`].
//!
//! Every handler ends with exactly one `go_to`. Menus that re-display
//! themselves navigate back to their own place.

mod forest;
mod stonebridge;
mod village;

use eldria_fiction::{Console, FictionResult, NavigationEngine, SceneFn};

use crate::place::Place;

/// The engine type every scene runs in.
pub type Engine = NavigationEngine<Place>;

/// Every scene, keyed by its place.
pub const SCENES: [(Place, SceneFn<Place>); 9] = [
    (Place::Start, village::start),
    (Place::Tavern, village::tavern),
    (Place::NoticeBoard, village::notice_board),
    (Place::Elder, village::elder),
    (Place::Inventory, village::inventory),
    (Place::ForestPath, forest::forest_path),
    (Place::HiddenClearing, forest::hidden_clearing),
    (Place::WaterfallCave, forest::waterfall_cave),
    (Place::Stonebridge, stonebridge::stonebridge),
];

/// Register every scene with `engine`.
pub fn register_all(engine: &mut Engine) {
    for (place, scene) in SCENES {
        engine.register_location(place, scene);
    }
}

/// Clear the screen and show a place's heading.
fn enter(console: &mut dyn Console, place: Place) -> FictionResult<()> {
    console.clear()?;
    console.display_text(&place.to_string().to_uppercase())
}

/// Show lines of narration in order.
fn narrate(console: &mut dyn Console, lines: &[&str]) -> FictionResult<()> {
    for line in lines {
        console.display_text(line)?;
    }
    Ok(())
}
