use async_trait::async_trait;
use thiserror::Error;

use crate::database::models::{Account, NewAccount};

/// Errors surfaced by account stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("account not found")]
    NotFound,

    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence interface for accounts. One logical table, one row per
/// account, primary key only.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account, assigning its id and join timestamp.
    async fn create(&self, fields: NewAccount) -> Result<Account, StoreError>;

    /// Fetch a single account by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, StoreError>;

    /// Fetch every account, ordered by id.
    async fn find_all(&self) -> Result<Vec<Account>, StoreError>;

    /// Replace the mutable fields of an existing account. `id` and
    /// `date_joined` are preserved. Errors with `NotFound` if the id is
    /// absent.
    async fn update(&self, id: i64, fields: NewAccount) -> Result<Account, StoreError>;

    /// Remove an account. Deleting an absent id is a no-op.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
