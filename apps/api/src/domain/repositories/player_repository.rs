use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::player::{NewPlayer, Player};

/// Repository trait for Player entities
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Insert a new player and return it with its assigned id
    async fn create(&self, player: &NewPlayer) -> RepositoryResult<Player>;

    /// Find a player by its ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Player>>;

    /// Find every player whose id is in `ids`, ordered by id. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Player>>;

    /// All players, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Player>>;

    /// Members of a guild, ordered by id
    async fn find_by_guild(&self, guild_id: i32) -> RepositoryResult<Vec<Player>>;

    /// Persist nickname, email and skill points of an existing player
    ///
    /// Guild membership is not written here; it only changes through guild
    /// creation, guild deletion and [`PlayerRepository::leave_guild`].
    async fn update(&self, player: &Player) -> RepositoryResult<()>;

    /// Take a player out of the given guild
    ///
    /// Fails with `NotFound` when the player is not a member of that guild.
    async fn leave_guild(&self, player_id: i32, guild_id: i32) -> RepositoryResult<()>;

    /// Delete a player together with its inventory
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
}
