pub mod check;
pub mod locations;
pub mod play;
