//! Game Hive Player API Library
//!
//! CRUD service for players, guilds and items: domain rules, repository
//! contracts with PostgreSQL and in-memory adapters, and the axum HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
