use thiserror::Error;

use crate::domain::DomainError;

/// Errors returned by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    /// A rule that only the store can check at write time, e.g. founding
    /// members taken by another guild before the insert
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    pub fn player_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Player",
            id,
        }
    }

    pub fn guild_not_found(id: i32) -> Self {
        Self::NotFound { entity: "Guild", id }
    }

    pub fn item_not_found(id: i32) -> Self {
        Self::NotFound { entity: "Item", id }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
