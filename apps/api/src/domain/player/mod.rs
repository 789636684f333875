// Player domain module
// Contains the player entity and its validated value objects

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

pub use player::{NewPlayer, Player};
pub use value_objects::{Email, Nickname};
