//! Read and prune the history of generated payments.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::QrisTransaction;
use crate::error::AppError;
use crate::ports::TransactionRepository;

pub struct PaymentHistory {
    transactions: Arc<dyn TransactionRepository>,
}

impl PaymentHistory {
    pub fn new(transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { transactions }
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<QrisTransaction>, AppError> {
        Ok(self.transactions.list(limit, offset).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<QrisTransaction, AppError> {
        Ok(self.transactions.get_by_id(id).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.transactions.delete_by_id(id).await? {
            return Err(AppError::NotFound(id.to_string()));
        }
        tracing::info!(%id, "transaction deleted");
        Ok(())
    }

    pub async fn clear(&self) -> Result<u64, AppError> {
        let removed = self.transactions.delete_all().await?;
        tracing::info!(removed, "transaction history cleared");
        Ok(removed)
    }
}
