//! Item names.

/// Sold by the stranger in the tavern; disarms the waterfall chest.
pub const ANCIENT_MAP: &str = "Ancient Map";
/// Taken from the notice board with the wolf quest.
pub const WOLF_CONTRACT: &str = "Wolf Hunting Contract";
/// Taken from the notice board with the herb quest.
pub const HERB_LIST: &str = "Herb Gathering List";
/// Taken from the notice board with the delivery quest.
pub const DELIVERY_PACKAGE: &str = "Delivery Package";
/// Lore from the village elder.
pub const CAVERN_KNOWLEDGE: &str = "Crystal Cavern Knowledge";
/// Found on the overgrown trail.
pub const RARE_HERBS: &str = "Rare Herbs";
/// Gathered in the hidden clearing.
pub const MORE_RARE_HERBS: &str = "More Rare Herbs";
/// Herb quest reward, also sold in Stonebridge.
pub const HEALING_POTION: &str = "Healing Potion";
/// Inside the waterfall chest.
pub const ANCIENT_ARTIFACT: &str = "Ancient Artifact";
/// Deep in the waterfall cave.
pub const ANCIENT_TOME: &str = "Ancient Tome";
