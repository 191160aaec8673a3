//! Process-local repositories, used when no database is configured and in tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{MerchantSettings, QrisTransaction};
use crate::ports::{
    RepositoryError, RepositoryResult, SettingsRepository, TransactionRepository,
};

#[derive(Clone, Default)]
pub struct InMemoryTransactionRepository {
    records: Arc<RwLock<Vec<QrisTransaction>>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn insert(&self, tx: &QrisTransaction) -> RepositoryResult<QrisTransaction> {
        let mut records = self.records.write().await;
        records.retain(|existing| existing.id != tx.id);
        records.push(tx.clone());
        Ok(tx.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<QrisTransaction> {
        self.records
            .read()
            .await
            .iter()
            .find(|tx| tx.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn list(&self, limit: i64, offset: i64) -> RepositoryResult<Vec<QrisTransaction>> {
        let records = self.records.read().await;
        let mut newest_first: Vec<QrisTransaction> = records.iter().rev().cloned().collect();
        newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(newest_first
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|tx| tx.id != id);
        Ok(records.len() != before)
    }

    async fn delete_all(&self) -> RepositoryResult<u64> {
        let mut records = self.records.write().await;
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }
}

#[derive(Clone, Default)]
pub struct InMemorySettingsRepository {
    settings: Arc<RwLock<MerchantSettings>>,
}

impl InMemorySettingsRepository {
    pub fn new(initial: MerchantSettings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(initial)),
        }
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn load(&self) -> RepositoryResult<MerchantSettings> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: &MerchantSettings) -> RepositoryResult<()> {
        *self.settings.write().await = settings.clone();
        Ok(())
    }

    async fn clear_payload(&self) -> RepositoryResult<()> {
        self.settings.write().await.qris_payload = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::qris::{FeeType, MerchantInfo};

    fn transaction(amount: i64) -> QrisTransaction {
        QrisTransaction::new(
            "static".to_string(),
            Some("dynamic".to_string()),
            amount,
            FeeType::None,
            0.0,
            MerchantInfo::default(),
        )
    }

    #[tokio::test]
    async fn lists_newest_first_with_paging() {
        let repo = InMemoryTransactionRepository::new();
        let mut older = transaction(1);
        older.created_at -= Duration::minutes(5);
        let newer = transaction(2);

        repo.insert(&older).await.unwrap();
        repo.insert(&newer).await.unwrap();

        let all = repo.list(10, 0).await.unwrap();
        assert_eq!(all.iter().map(|tx| tx.amount).collect::<Vec<_>>(), vec![2, 1]);

        let second_page = repo.list(1, 1).await.unwrap();
        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].amount, 1);
    }

    #[tokio::test]
    async fn deletes_by_id_and_all() {
        let repo = InMemoryTransactionRepository::new();
        let first = repo.insert(&transaction(1)).await.unwrap();
        repo.insert(&transaction(2)).await.unwrap();

        assert!(repo.delete_by_id(first.id).await.unwrap());
        assert!(!repo.delete_by_id(first.id).await.unwrap());
        assert!(matches!(
            repo.get_by_id(first.id).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert_eq!(repo.delete_all().await.unwrap(), 1);
        assert!(repo.list(10, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn settings_round_trip_and_clear_payload() {
        let repo = InMemorySettingsRepository::default();
        let settings = MerchantSettings {
            qris_payload: Some("payload".to_string()),
            fee_type: FeeType::Fixed,
            fee_value: 500.0,
            ..Default::default()
        };

        repo.save(&settings).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), settings);

        repo.clear_payload().await.unwrap();
        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.qris_payload, None);
        assert_eq!(loaded.fee_type, FeeType::Fixed);
    }
}
