use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::errors::{DomainError, MIN_GUILD_MEMBERS};
use crate::domain::guild::{Guild, NewGuild};
use crate::domain::repositories::{GuildRepository, RepositoryError, RepositoryResult};

#[derive(Debug, FromRow)]
struct GuildRow {
    id: i32,
    name: String,
    country_code: Option<String>,
}

impl From<GuildRow> for Guild {
    fn from(r: GuildRow) -> Self {
        Guild::from_persistence(r.id, r.name, r.country_code)
    }
}

/// PostgreSQL implementation of GuildRepository
///
/// Guild membership lives in `players.guild_id`, so creating and deleting a
/// guild touches both tables inside one transaction.
pub struct PostgresGuildRepository {
    pool: PgPool,
}

impl PostgresGuildRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuildRepository for PostgresGuildRepository {
    async fn create(&self, guild: &NewGuild) -> RepositoryResult<Guild> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, GuildRow>(
            r#"
            INSERT INTO guilds (name, country_code)
            VALUES ($1, $2)
            RETURNING id, name, country_code
            "#,
        )
        .bind(guild.name())
        .bind(guild.country_code())
        .fetch_one(&mut *tx)
        .await?;

        let enlisted = sqlx::query(
            r#"
            UPDATE players
            SET guild_id = $1
            WHERE id = ANY($2) AND guild_id IS NULL
            "#,
        )
        .bind(row.id)
        .bind(guild.member_ids().to_vec())
        .execute(&mut *tx)
        .await?
        .rows_affected() as usize;

        // Members may have joined another guild since validation; dropping
        // the transaction rolls the insert back.
        if enlisted < MIN_GUILD_MEMBERS {
            return Err(DomainError::GuildTooSmall { members: enlisted }.into());
        }

        tx.commit().await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Guild>> {
        let row = sqlx::query_as::<_, GuildRow>(
            "SELECT id, name, country_code FROM guilds WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Guild::from))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Guild>> {
        let rows = sqlx::query_as::<_, GuildRow>(
            "SELECT id, name, country_code FROM guilds ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Guild::from).collect())
    }

    async fn update(&self, guild: &Guild) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE guilds
            SET name = $2, country_code = $3
            WHERE id = $1
            "#,
        )
        .bind(guild.id())
        .bind(guild.name())
        .bind(guild.country_code())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::guild_not_found(guild.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE players SET guild_id = NULL WHERE guild_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM guilds WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::guild_not_found(id));
        }

        tx.commit().await?;
        Ok(())
    }
}
