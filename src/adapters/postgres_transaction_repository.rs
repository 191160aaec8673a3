//! Postgres implementation of TransactionRepository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::QrisTransaction;
use crate::ports::{RepositoryError, RepositoryResult, TransactionRepository};
use crate::qris::{FeeType, MerchantInfo};

/// Postgres-backed transaction history.
#[derive(Clone)]
pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn insert(&self, tx: &QrisTransaction) -> RepositoryResult<QrisTransaction> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            INSERT INTO qris_transactions (
                id, original_payload, generated_payload, amount, fee_type, fee_value,
                merchant_name, merchant_city, merchant_id, merchant_category,
                merchant_acquirer, merchant_post_code, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(tx.id)
        .bind(&tx.original_payload)
        .bind(&tx.generated_payload)
        .bind(tx.amount)
        .bind(tx.fee_type.as_str())
        .bind(tx.fee_value)
        .bind(&tx.merchant.name)
        .bind(&tx.merchant.city)
        .bind(&tx.merchant.id)
        .bind(&tx.merchant.category)
        .bind(&tx.merchant.acquirer)
        .bind(&tx.merchant.post_code)
        .bind(tx.created_at)
        .fetch_one(&self.pool)
        .await?;

        row.into_domain()
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<QrisTransaction> {
        let row =
            sqlx::query_as::<_, TransactionRow>("SELECT * FROM qris_transactions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.ok_or_else(|| RepositoryError::NotFound(id.to_string()))?
            .into_domain()
    }

    async fn list(&self, limit: i64, offset: i64) -> RepositoryResult<Vec<QrisTransaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            "SELECT * FROM qris_transactions ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TransactionRow::into_domain).collect()
    }

    async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM qris_transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> RepositoryResult<u64> {
        let result = sqlx::query("DELETE FROM qris_transactions")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Internal row type for SQLx. Not exposed outside the adapter.
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: Uuid,
    original_payload: String,
    generated_payload: Option<String>,
    amount: i64,
    fee_type: String,
    fee_value: f64,
    merchant_name: String,
    merchant_city: String,
    merchant_id: Option<String>,
    merchant_category: Option<String>,
    merchant_acquirer: Option<String>,
    merchant_post_code: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TransactionRow {
    fn into_domain(self) -> RepositoryResult<QrisTransaction> {
        let fee_type: FeeType = self
            .fee_type
            .parse()
            .map_err(|e: crate::qris::UnknownFeeType| RepositoryError::Corrupt(e.to_string()))?;

        Ok(QrisTransaction {
            id: self.id,
            original_payload: self.original_payload,
            generated_payload: self.generated_payload,
            amount: self.amount,
            fee_type,
            fee_value: self.fee_value,
            merchant: MerchantInfo {
                name: self.merchant_name,
                city: self.merchant_city,
                id: self.merchant_id,
                category: self.merchant_category,
                acquirer: self.merchant_acquirer,
                post_code: self.merchant_post_code,
            },
            created_at: self.created_at,
        })
    }
}
