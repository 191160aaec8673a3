//! Wires storage adapters from the loaded config.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::adapters::{
    InMemorySettingsRepository, InMemoryTransactionRepository, PostgresSettingsRepository,
    PostgresTransactionRepository,
};
use crate::config::Config;
use crate::db;
use crate::ports::{SettingsRepository, TransactionRepository};
use crate::use_cases::{ConfigureMerchant, GeneratePayment, PaymentHistory};

#[derive(Clone)]
pub struct Repositories {
    pub transactions: Arc<dyn TransactionRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repositories {
    /// Postgres when `DATABASE_URL` is set, process memory otherwise.
    pub async fn connect(config: &Config) -> Result<Self> {
        match &config.database_url {
            Some(url) => {
                let pool = db::create_pool(url)
                    .await
                    .context("failed to connect to the database")?;
                db::run_migrations(&pool).await?;

                Ok(Self {
                    transactions: Arc::new(PostgresTransactionRepository::new(pool.clone())),
                    settings: Arc::new(PostgresSettingsRepository::new(
                        pool,
                        config.merchant_settings(),
                    )),
                })
            }
            None => {
                tracing::debug!("DATABASE_URL not set, keeping history in memory");
                Ok(Self::in_memory(config))
            }
        }
    }

    pub fn in_memory(config: &Config) -> Self {
        Self {
            transactions: Arc::new(InMemoryTransactionRepository::new()),
            settings: Arc::new(InMemorySettingsRepository::new(config.merchant_settings())),
        }
    }

    pub fn configure_merchant(&self) -> ConfigureMerchant {
        ConfigureMerchant::new(self.settings.clone())
    }

    pub fn generate_payment(&self) -> GeneratePayment {
        GeneratePayment::new(self.transactions.clone(), self.settings.clone())
    }

    pub fn payment_history(&self) -> PaymentHistory {
        PaymentHistory::new(self.transactions.clone())
    }
}
