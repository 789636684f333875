// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_store;
pub mod postgres_guild_repository;
pub mod postgres_item_repository;
pub mod postgres_player_repository;

pub use in_memory_store::InMemoryStore;
pub use postgres_guild_repository::PostgresGuildRepository;
pub use postgres_item_repository::PostgresItemRepository;
pub use postgres_player_repository::PostgresPlayerRepository;
