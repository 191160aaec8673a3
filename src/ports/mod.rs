//! Storage boundaries. The codec never touches these; use cases receive them
//! as explicit handles.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{MerchantSettings, QrisTransaction};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid stored record: {0}")]
    Corrupt(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// History of generated payments.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn insert(&self, tx: &QrisTransaction) -> RepositoryResult<QrisTransaction>;

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<QrisTransaction>;

    /// Newest first.
    async fn list(&self, limit: i64, offset: i64) -> RepositoryResult<Vec<QrisTransaction>>;

    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<bool>;

    /// Returns the number of records removed.
    async fn delete_all(&self) -> RepositoryResult<u64>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load(&self) -> RepositoryResult<MerchantSettings>;

    async fn save(&self, settings: &MerchantSettings) -> RepositoryResult<()>;

    async fn clear_payload(&self) -> RepositoryResult<()>;
}
