//! Stores a static payload and the merchant preferences derived from it.

use std::sync::Arc;

use crate::domain::MerchantSettings;
use crate::error::AppError;
use crate::ports::SettingsRepository;
use crate::qris::{is_well_formed, parse, FeeType, MerchantOverrides, ParsedQris};
use crate::validation::{
    sanitize_overrides, sanitize_string, validate_fee_value, validate_required,
};

#[derive(Debug, Clone, Default)]
pub struct ConfigureMerchantInput {
    pub payload: String,
    /// Explicit merchant values; missing ones are taken from the payload.
    pub overrides: MerchantOverrides,
    pub merchant_category: Option<String>,
    pub fee_type: Option<FeeType>,
    pub fee_value: Option<f64>,
}

pub struct ConfigureMerchant {
    settings: Arc<dyn SettingsRepository>,
}

impl ConfigureMerchant {
    pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, input: ConfigureMerchantInput) -> Result<ParsedQris, AppError> {
        let payload = input.payload.trim();
        validate_required("qris_payload", payload)?;

        if !is_well_formed(payload) {
            return Err(AppError::InvalidPayload(
                "payload failed the length or checksum check".to_string(),
            ));
        }

        let parsed = parse(payload);
        if !parsed.is_valid {
            return Err(AppError::InvalidPayload(
                parsed
                    .error_message
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        let overrides = sanitize_overrides(&input.overrides)?;
        let category = input
            .merchant_category
            .as_deref()
            .map(sanitize_string)
            .filter(|c| !c.is_empty());

        let mut settings = self.settings.load().await?;
        apply(&mut settings, payload, &parsed, overrides, category);

        if let Some(fee_type) = input.fee_type {
            let fee_value = input.fee_value.unwrap_or(0.0);
            validate_fee_value(fee_value)?;
            settings.fee_type = fee_type;
            settings.fee_value = fee_value;
        }

        self.settings.save(&settings).await?;
        tracing::info!(
            merchant = settings.merchant_name.as_deref().unwrap_or_default(),
            city = settings.merchant_city.as_deref().unwrap_or_default(),
            fee_type = %settings.fee_type,
            "merchant settings stored"
        );

        Ok(parsed)
    }

    pub async fn clear(&self) -> Result<(), AppError> {
        self.settings.clear_payload().await?;
        tracing::info!("stored qris payload cleared");
        Ok(())
    }
}

fn apply(
    settings: &mut MerchantSettings,
    payload: &str,
    parsed: &ParsedQris,
    overrides: MerchantOverrides,
    category: Option<String>,
) {
    let merchant = &parsed.merchant;
    settings.qris_payload = Some(payload.to_string());
    settings.merchant_name = overrides.name.or_else(|| Some(merchant.name.clone()));
    settings.merchant_city = overrides.city.or_else(|| Some(merchant.city.clone()));
    settings.postal_code = overrides.post_code.or_else(|| merchant.post_code.clone());
    settings.merchant_category = category.or_else(|| merchant.category.clone());
}
