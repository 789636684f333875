// Domain layer module exports
// Entities, validation rules and the repository contracts they are stored through

pub mod errors;
pub mod guild;
pub mod item;
pub mod player;
pub mod repositories;

pub use errors::{DomainError, DomainResult};
