#[macro_use]
pub mod util;
pub mod game;
pub mod player;
pub mod primitives;
pub mod rules;
