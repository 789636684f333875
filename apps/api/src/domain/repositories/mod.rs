// Repository contracts for the three entities
// Implementations live in infrastructure::repositories

pub mod errors;
pub mod guild_repository;
pub mod item_repository;
pub mod player_repository;

pub use errors::{RepositoryError, RepositoryResult};
pub use guild_repository::GuildRepository;
pub use item_repository::ItemRepository;
pub use player_repository::PlayerRepository;
