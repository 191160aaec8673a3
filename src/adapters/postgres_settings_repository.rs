//! Postgres implementation of SettingsRepository. Settings live in a single row.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::MerchantSettings;
use crate::ports::{RepositoryError, RepositoryResult, SettingsRepository};
use crate::qris::FeeType;

#[derive(Clone)]
pub struct PostgresSettingsRepository {
    pool: PgPool,
    /// Returned until something has been saved.
    fallback: MerchantSettings,
}

impl PostgresSettingsRepository {
    pub fn new(pool: PgPool, fallback: MerchantSettings) -> Self {
        Self { pool, fallback }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn load(&self) -> RepositoryResult<MerchantSettings> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            SELECT qris_payload, merchant_name, merchant_city, merchant_category,
                   postal_code, fee_type, fee_value
            FROM merchant_settings WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_domain(),
            None => Ok(self.fallback.clone()),
        }
    }

    async fn save(&self, settings: &MerchantSettings) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO merchant_settings (
                id, qris_payload, merchant_name, merchant_city, merchant_category,
                postal_code, fee_type, fee_value, updated_at
            ) VALUES (1, $1, $2, $3, $4, $5, $6, $7, NOW())
            ON CONFLICT (id) DO UPDATE SET
                qris_payload = EXCLUDED.qris_payload,
                merchant_name = EXCLUDED.merchant_name,
                merchant_city = EXCLUDED.merchant_city,
                merchant_category = EXCLUDED.merchant_category,
                postal_code = EXCLUDED.postal_code,
                fee_type = EXCLUDED.fee_type,
                fee_value = EXCLUDED.fee_value,
                updated_at = NOW()
            "#,
        )
        .bind(&settings.qris_payload)
        .bind(&settings.merchant_name)
        .bind(&settings.merchant_city)
        .bind(&settings.merchant_category)
        .bind(&settings.postal_code)
        .bind(settings.fee_type.as_str())
        .bind(settings.fee_value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn clear_payload(&self) -> RepositoryResult<()> {
        let mut settings = self.load().await?;
        settings.qris_payload = None;
        self.save(&settings).await
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SettingsRow {
    qris_payload: Option<String>,
    merchant_name: Option<String>,
    merchant_city: Option<String>,
    merchant_category: Option<String>,
    postal_code: Option<String>,
    fee_type: String,
    fee_value: f64,
}

impl SettingsRow {
    fn into_domain(self) -> RepositoryResult<MerchantSettings> {
        let fee_type: FeeType = self
            .fee_type
            .parse()
            .map_err(|e: crate::qris::UnknownFeeType| RepositoryError::Corrupt(e.to_string()))?;

        Ok(MerchantSettings {
            qris_payload: self.qris_payload,
            merchant_name: self.merchant_name,
            merchant_city: self.merchant_city,
            merchant_category: self.merchant_category,
            postal_code: self.postal_code,
            fee_type,
            fee_value: self.fee_value,
        })
    }
}
