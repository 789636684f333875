// Guild domain module

#![allow(clippy::module_inception)]

pub mod guild;

pub use guild::{Guild, NewGuild};
