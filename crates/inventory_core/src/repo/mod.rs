//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define key-based data access contracts consumed by services.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them.

pub mod audit_repo;
pub mod material_raw_material_repo;
pub mod material_repo;
pub mod raw_material_repo;

use crate::db::DbError;
use crate::model::material::MaterialValidationError;
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Shared error for every repository in the crate.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] MaterialValidationError),
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("invalid persisted data: {0}")]
    InvalidData(String),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
