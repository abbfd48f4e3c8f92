use std::fmt;

use serde::Serialize;

use eldria_fiction::Location;

/// Every location in Eldria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Place {
    /// Moonhaven village square, where the game begins.
    Start,
    /// The Golden Ale tavern.
    Tavern,
    /// The village notice board.
    NoticeBoard,
    /// The village elder's cottage.
    Elder,
    /// The forest crossroads.
    ForestPath,
    /// The inventory screen.
    Inventory,
    /// The market town of Stonebridge.
    Stonebridge,
    /// A sunlit clearing off the overgrown trail.
    HiddenClearing,
    /// The cave behind the waterfall.
    WaterfallCave,
}

impl Location for Place {
    const ALL: &'static [Self] = &[
        Place::Start,
        Place::Tavern,
        Place::NoticeBoard,
        Place::Elder,
        Place::ForestPath,
        Place::Inventory,
        Place::Stonebridge,
        Place::HiddenClearing,
        Place::WaterfallCave,
    ];

    fn key(self) -> &'static str {
        match self {
            Place::Start => "start",
            Place::Tavern => "tavern",
            Place::NoticeBoard => "notice_board",
            Place::Elder => "elder",
            Place::ForestPath => "forest_path",
            Place::Inventory => "inventory",
            Place::Stonebridge => "stonebridge",
            Place::HiddenClearing => "hidden_clearing",
            Place::WaterfallCave => "waterfall_cave",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Place::Start => "Moonhaven Village",
            Place::Tavern => "The Golden Ale Tavern",
            Place::NoticeBoard => "Village Notice Board",
            Place::Elder => "Village Elder's Cottage",
            Place::ForestPath => "Forest Path",
            Place::Inventory => "Inventory",
            Place::Stonebridge => "Stonebridge Village",
            Place::HiddenClearing => "Hidden Clearing",
            Place::WaterfallCave => "Waterfall Cave",
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for place in Place::ALL {
            assert_eq!(Place::parse(place.key()), Some(*place));
        }
    }

    #[test]
    fn resolve_suggests_typo_fix() {
        let err = Place::resolve("tavrn").unwrap_err();
        assert!(err.to_string().contains("did you mean \"tavern\""));
    }

    #[test]
    fn serializes_as_key() {
        let json = serde_json::to_string(&Place::ForestPath).unwrap();
        assert_eq!(json, "\"forest_path\"");
    }
}
