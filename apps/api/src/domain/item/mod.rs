// Item domain module

#![allow(clippy::module_inception)]

pub mod item;

pub use item::{Item, NewItem};
