//! Core player state for The Lost Realms of Eldria.
//!
//! This crate owns the mutable record every scene reads and writes: health,
//! gold, reputation, the inventory, and quest progress. It performs no I/O.
//! Mutators report what they changed through return values so that the
//! presentation layer decides how (and whether) to tell the player.

/// State-change reports produced when effects are applied.
pub mod change;
/// Error types used throughout the crate.
pub mod error;
/// The player's stats and inventory.
pub mod player;
/// Typed quest identifiers and progress tracking.
pub mod quest;

/// Re-export the change report type.
pub use change::StateChange;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export player state types.
pub use player::{DEFAULT_GOLD, DEFAULT_HEALTH, MAX_HEALTH, PlayerState};
/// Re-export quest types.
pub use quest::{Quest, QuestLog, QuestProgress};
