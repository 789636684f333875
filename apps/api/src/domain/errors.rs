use thiserror::Error;

/// Minimum number of founding members a guild needs
pub const MIN_GUILD_MEMBERS: usize = 2;

/// Longest nickname the `players` table accepts
pub const MAX_NICKNAME_LEN: usize = 80;

/// Longest email address the `players` table accepts
pub const MAX_EMAIL_LEN: usize = 120;

/// Business rule violations raised while building or mutating entities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Email is not valid!")]
    InvalidEmail,

    #[error("Your guild would be too lonely with just you, try to get more members!")]
    GuildTooSmall { members: usize },

    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

pub type DomainResult<T> = Result<T, DomainError>;
