//! Builds a dynamic (fixed-amount) payload from a static one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fee::{final_amount, FeeType};
use super::parser::{parse, ParsedQris};
use crate::emv::tags;
use crate::emv::{encode_field, seal_with_checksum, TlvError};

/// Merchant fields that replace the decoded ones. Blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantOverrides {
    pub name: Option<String>,
    pub city: Option<String>,
    pub post_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid QRIS payload: {0}")]
    InvalidPayload(String),

    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(i64),

    #[error(transparent)]
    Field(#[from] TlvError),
}

/// Re-encodes `static_payload` as a dynamic payload charging `amount` plus
/// the fee, then seals it with a fresh checksum.
///
/// Output depends only on the inputs.
pub fn generate_dynamic(
    static_payload: &str,
    amount: i64,
    fee_type: FeeType,
    fee_value: f64,
    overrides: &MerchantOverrides,
) -> Result<String, GenerationError> {
    let parsed = parse(static_payload);
    if !parsed.is_valid {
        return Err(GenerationError::InvalidPayload(
            parsed
                .error_message
                .unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    if amount <= 0 {
        return Err(GenerationError::NonPositiveAmount(amount));
    }

    let total = final_amount(amount, fee_type, fee_value);
    tracing::debug!(amount, total, fee_type = %fee_type, fee_value, "computed final amount");

    let body = dynamic_body(&parsed, total, overrides)?;
    let payload = seal_with_checksum(&body);
    tracing::debug!(length = payload.len(), "generated dynamic qris payload");

    Ok(payload)
}

fn dynamic_body(
    parsed: &ParsedQris,
    total: i64,
    overrides: &MerchantOverrides,
) -> Result<String, TlvError> {
    let source = &parsed.tlv_map;
    let passthrough = |tag: &str| source.get(tag).map(String::as_str).unwrap_or("");

    let mut body = String::new();
    let mut push = |tag: &str, value: &str| -> Result<(), TlvError> {
        body.push_str(&encode_field(tag, value)?);
        Ok(())
    };

    push(tags::PAYLOAD_FORMAT, tags::PAYLOAD_FORMAT_VERSION)?;
    push(tags::POINT_OF_INITIATION, tags::INITIATION_DYNAMIC)?;
    push(tags::MERCHANT_ACCOUNT, passthrough(tags::MERCHANT_ACCOUNT))?;
    push(tags::MERCHANT_ACCOUNT_DOMESTIC, passthrough(tags::MERCHANT_ACCOUNT_DOMESTIC))?;
    push(tags::MERCHANT_CATEGORY, passthrough(tags::MERCHANT_CATEGORY))?;
    push(
        tags::TRANSACTION_CURRENCY,
        source
            .get(tags::TRANSACTION_CURRENCY)
            .map(String::as_str)
            .unwrap_or(tags::DEFAULT_CURRENCY_CODE),
    )?;
    if total > 0 {
        push(tags::TRANSACTION_AMOUNT, &format!("{}.00", total))?;
    }
    push(
        tags::COUNTRY_CODE,
        source
            .get(tags::COUNTRY_CODE)
            .map(String::as_str)
            .unwrap_or(tags::DEFAULT_COUNTRY_CODE),
    )?;

    let merchant = &parsed.merchant;
    push(
        tags::MERCHANT_NAME,
        chosen(&overrides.name).unwrap_or(merchant.name.as_str()),
    )?;
    push(
        tags::MERCHANT_CITY,
        chosen(&overrides.city).unwrap_or(merchant.city.as_str()),
    )?;
    push(
        tags::POSTAL_CODE,
        chosen(&overrides.post_code)
            .or(merchant.post_code.as_deref())
            .unwrap_or(""),
    )?;
    push(tags::ADDITIONAL_DATA, passthrough(tags::ADDITIONAL_DATA))?;

    Ok(body)
}

fn chosen(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
