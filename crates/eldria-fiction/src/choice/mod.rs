//! Menus, effects, and conditions for scene handlers.
//!
//! A scene shows a [`Menu`], branches on the chosen option, checks
//! [`Condition`]s against the player, and applies [`Effect`]s.

mod condition;
mod effect;
mod menu;

pub use condition::Condition;
pub use effect::Effect;
pub use menu::Menu;
