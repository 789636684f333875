use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::guild::{Guild, NewGuild};

/// Repository trait for Guild entities
///
/// Membership is stored on the player rows; creation and deletion of a guild
/// update those rows in the same transaction.
#[async_trait]
pub trait GuildRepository: Send + Sync {
    /// Insert a guild and enlist its founding members
    ///
    /// Founding members that joined another guild in the meantime are left alone.
    async fn create(&self, guild: &NewGuild) -> RepositoryResult<Guild>;

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Guild>>;

    /// All guilds, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Guild>>;

    async fn update(&self, guild: &Guild) -> RepositoryResult<()>;

    /// Delete a guild; its members stay, without a guild
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
}
