use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::player::{NewPlayer, Player};
use crate::domain::repositories::{PlayerRepository, RepositoryError, RepositoryResult};

#[derive(Debug, FromRow)]
struct PlayerRow {
    id: i32,
    nickname: String,
    email: String,
    skill_points: i32,
    guild_id: Option<i32>,
}

impl From<PlayerRow> for Player {
    fn from(r: PlayerRow) -> Self {
        Player::from_persistence(r.id, r.nickname, r.email, r.skill_points, r.guild_id)
    }
}

/// PostgreSQL implementation of PlayerRepository
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    /// Creates a new PostgresPlayerRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn create(&self, player: &NewPlayer) -> RepositoryResult<Player> {
        let row = sqlx::query_as::<_, PlayerRow>(
            r#"
            INSERT INTO players (nickname, email, skill_points)
            VALUES ($1, $2, $3)
            RETURNING id, nickname, email, skill_points, guild_id
            "#,
        )
        .bind(player.nickname().as_str())
        .bind(player.email().as_str())
        .bind(player.skill_points())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Player>> {
        let row = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT id, nickname, email, skill_points, guild_id
            FROM players
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Player::from))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT id, nickname, email, skill_points, guild_id
            FROM players
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT id, nickname, email, skill_points, guild_id
            FROM players
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn find_by_guild(&self, guild_id: i32) -> RepositoryResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT id, nickname, email, skill_points, guild_id
            FROM players
            WHERE guild_id = $1
            ORDER BY id
            "#,
        )
        .bind(guild_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn update(&self, player: &Player) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET nickname = $2, email = $3, skill_points = $4
            WHERE id = $1
            "#,
        )
        .bind(player.id())
        .bind(player.nickname())
        .bind(player.email())
        .bind(player.skill_points())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::player_not_found(player.id()));
        }

        Ok(())
    }

    async fn leave_guild(&self, player_id: i32, guild_id: i32) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET guild_id = NULL
            WHERE id = $1 AND guild_id = $2
            "#,
        )
        .bind(player_id)
        .bind(guild_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::player_not_found(player_id));
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        // Inventory goes first; items.player_id restricts the player delete.
        sqlx::query("DELETE FROM items WHERE player_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::player_not_found(id));
        }

        tx.commit().await?;
        Ok(())
    }
}
