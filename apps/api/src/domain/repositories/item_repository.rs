use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::item::{Item, NewItem};

/// Repository trait for Item entities
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create(&self, item: &NewItem) -> RepositoryResult<Item>;

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Item>>;

    /// All items, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Item>>;

    /// A player's inventory, ordered by id
    async fn find_by_player(&self, player_id: i32) -> RepositoryResult<Vec<Item>>;

    async fn update(&self, item: &Item) -> RepositoryResult<()>;

    async fn delete(&self, id: i32) -> RepositoryResult<()>;
}
