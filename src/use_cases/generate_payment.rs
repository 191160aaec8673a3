//! Generate a dynamic payment and record it in the history.

use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::QrisTransaction;
use crate::error::AppError;
use crate::ports::{SettingsRepository, TransactionRepository};
use crate::qris::{
    final_amount, generate_dynamic, is_well_formed, parse, FeeType, MerchantInfo,
    MerchantOverrides,
};
use crate::utils::sanitize::mask_value;
use crate::validation::{sanitize_overrides, validate_fee_value, validate_positive_amount};

/// Input for the GeneratePayment use case.
#[derive(Debug, Clone, Default)]
pub struct GeneratePaymentInput {
    /// Static payload to generate from; the stored one is used when absent.
    pub static_payload: Option<String>,
    pub amount: i64,
    /// Fee parameters; the stored ones are used when absent.
    pub fee_type: Option<FeeType>,
    pub fee_value: Option<f64>,
    pub overrides: MerchantOverrides,
    pub save_history: bool,
}

/// Output of the GeneratePayment use case.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratePaymentOutput {
    pub payload: String,
    pub final_amount: i64,
    pub merchant: MerchantInfo,
    pub transaction_id: Option<Uuid>,
}

pub struct GeneratePayment {
    transactions: Arc<dyn TransactionRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl GeneratePayment {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            transactions,
            settings,
        }
    }

    pub async fn execute(
        &self,
        input: GeneratePaymentInput,
    ) -> Result<GeneratePaymentOutput, AppError> {
        validate_positive_amount(input.amount)?;
        let settings = self.settings.load().await?;

        let given = input
            .static_payload
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());
        let stored = settings
            .qris_payload
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        // Stored merchant preferences only apply to the stored payload.
        let (source, defaults) = match (given, stored) {
            (Some(payload), _) => (payload.to_string(), MerchantOverrides::default()),
            (None, Some(payload)) => (payload.to_string(), settings.overrides()),
            (None, None) => {
                return Err(AppError::NotConfigured(
                    "no static QRIS payload given or stored".to_string(),
                ))
            }
        };

        let (fee_type, fee_value) = match input.fee_type {
            Some(fee_type) => (fee_type, input.fee_value.unwrap_or(0.0)),
            None => (settings.fee_type, settings.fee_value),
        };
        validate_fee_value(fee_value)?;

        let requested = sanitize_overrides(&input.overrides)?;
        let overrides = MerchantOverrides {
            name: requested.name.or(defaults.name),
            city: requested.city.or(defaults.city),
            post_code: requested.post_code.or(defaults.post_code),
        };

        if !is_well_formed(&source) {
            tracing::warn!("source payload does not pass the checksum check");
        }

        let payload = generate_dynamic(&source, input.amount, fee_type, fee_value, &overrides)?;
        let merchant = parse(&payload).merchant;
        let total = final_amount(input.amount, fee_type, fee_value);

        let transaction_id = if input.save_history {
            let tx = QrisTransaction::new(
                source,
                Some(payload.clone()),
                input.amount,
                fee_type,
                fee_value,
                merchant.clone(),
            );
            let inserted = self.transactions.insert(&tx).await?;
            tracing::info!(
                id = %inserted.id,
                merchant_id = %merchant.id.as_deref().map(mask_value).unwrap_or_default(),
                final_amount = total,
                "payment saved to history"
            );
            Some(inserted.id)
        } else {
            None
        };

        Ok(GeneratePaymentOutput {
            payload,
            final_amount: total,
            merchant,
            transaction_id,
        })
    }
}
