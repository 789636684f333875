//! Application context shared by every request handler.
//!
//! Built once in `main` (or by a test) and handed to the router; axum clones it
//! per request, which only bumps the repository reference counts.

use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{GuildRepository, ItemRepository, PlayerRepository};
use crate::infrastructure::repositories::{
    InMemoryStore, PostgresGuildRepository, PostgresItemRepository, PostgresPlayerRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub players: Arc<dyn PlayerRepository>,
    pub guilds: Arc<dyn GuildRepository>,
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        guilds: Arc<dyn GuildRepository>,
        items: Arc<dyn ItemRepository>,
    ) -> Self {
        Self {
            players,
            guilds,
            items,
        }
    }

    /// Repositories backed by a PostgreSQL pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresPlayerRepository::new(pool.clone())),
            Arc::new(PostgresGuildRepository::new(pool.clone())),
            Arc::new(PostgresItemRepository::new(pool)),
        )
    }

    /// Repositories sharing one [`InMemoryStore`]
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }
}
