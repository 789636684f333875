use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::domain::item::{Item, NewItem};
use crate::domain::repositories::{ItemRepository, RepositoryError, RepositoryResult};

#[derive(Debug, FromRow)]
struct ItemRow {
    id: i32,
    name: String,
    skill_points: i32,
    player_id: Option<i32>,
}

impl From<ItemRow> for Item {
    fn from(r: ItemRow) -> Self {
        Item::from_persistence(r.id, r.name, r.skill_points, r.player_id)
    }
}

/// PostgreSQL implementation of ItemRepository
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: &NewItem) -> RepositoryResult<Item> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (name, skill_points, player_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, skill_points, player_id
            "#,
        )
        .bind(item.name())
        .bind(item.skill_points())
        .bind(item.player_id())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, skill_points, player_id FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Item::from))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, skill_points, player_id FROM items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find_by_player(&self, player_id: i32) -> RepositoryResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, skill_points, player_id
            FROM items
            WHERE player_id = $1
            ORDER BY id
            "#,
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn update(&self, item: &Item) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, skill_points = $3, player_id = $4
            WHERE id = $1
            "#,
        )
        .bind(item.id())
        .bind(item.name())
        .bind(item.skill_points())
        .bind(item.player_id())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::item_not_found(item.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::item_not_found(id));
        }

        Ok(())
    }
}
