//! Interprets decoded TLV records as a QRIS merchant payload.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emv::tags::{self, merchant_account};
use crate::emv::{crc16_hex, decode, TlvMap};

/// Payloads shorter than this (after trimming) are never considered well formed.
pub const MIN_PAYLOAD_LEN: usize = 50;

/// CRC tag followed by its fixed length.
pub const CRC_MARKER: &str = "6304";

const CRC_HEX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantInfo {
    pub name: String,
    pub city: String,
    /// Merchant PAN from the nested merchant-account record.
    pub id: Option<String>,
    pub category: Option<String>,
    /// Global unique identifier of the acquirer, from the nested record.
    pub acquirer: Option<String>,
    pub post_code: Option<String>,
}

impl Default for MerchantInfo {
    fn default() -> Self {
        Self {
            name: tags::DEFAULT_MERCHANT_NAME.to_string(),
            city: tags::DEFAULT_MERCHANT_CITY.to_string(),
            id: None,
            category: None,
            acquirer: None,
            post_code: None,
        }
    }
}

/// Result of [`parse`]. When `is_valid` is false every field still carries a
/// usable default and `error_message` says why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQris {
    pub is_valid: bool,
    pub merchant: MerchantInfo,
    pub amount: i64,
    pub currency_code: String,
    pub country_code: String,
    pub initiation_method: String,
    pub original_payload: String,
    pub tlv_map: TlvMap,
    pub error_message: Option<String>,
}

impl ParsedQris {
    fn invalid(payload: &str, message: String) -> Self {
        Self {
            is_valid: false,
            merchant: MerchantInfo::default(),
            amount: 0,
            currency_code: tags::DEFAULT_CURRENCY_CODE.to_string(),
            country_code: tags::DEFAULT_COUNTRY_CODE.to_string(),
            initiation_method: tags::INITIATION_STATIC.to_string(),
            original_payload: payload.to_string(),
            tlv_map: TlvMap::new(),
            error_message: Some(message),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        self.initiation_method == tags::INITIATION_DYNAMIC
    }
}

#[derive(Debug, Error)]
enum ParseError {
    #[error("payload contains no TLV records")]
    NoRecords,

    #[error("merchant account record is malformed")]
    MalformedMerchantAccount,
}

/// Decodes a QRIS payload. Never fails; problems are reported through
/// `is_valid` and `error_message` on the returned value.
pub fn parse(payload: &str) -> ParsedQris {
    match interpret(payload) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(error = %err, "rejected qris payload");
            ParsedQris::invalid(payload, err.to_string())
        }
    }
}

fn interpret(payload: &str) -> Result<ParsedQris, ParseError> {
    let tlv_map = decode(payload);
    if tlv_map.is_empty() {
        return Err(ParseError::NoRecords);
    }

    let account = match tlv_map.get(tags::MERCHANT_ACCOUNT) {
        Some(value) if !value.is_empty() => {
            let nested = decode(value);
            if nested.is_empty() {
                return Err(ParseError::MalformedMerchantAccount);
            }
            nested
        }
        _ => TlvMap::new(),
    };

    let top = |tag: &str| tlv_map.get(tag).cloned();
    let text_or = |tag: &str, default: &str| top(tag).unwrap_or_else(|| default.to_string());

    let merchant = MerchantInfo {
        name: text_or(tags::MERCHANT_NAME, tags::DEFAULT_MERCHANT_NAME),
        city: text_or(tags::MERCHANT_CITY, tags::DEFAULT_MERCHANT_CITY),
        id: account.get(merchant_account::MERCHANT_PAN).cloned(),
        category: top(tags::MERCHANT_CATEGORY),
        acquirer: account.get(merchant_account::GLOBAL_UNIQUE_ID).cloned(),
        post_code: top(tags::POSTAL_CODE),
    };

    let amount = tlv_map
        .get(tags::TRANSACTION_AMOUNT)
        .map_or(0, |raw| parse_amount(raw));

    let currency_code = text_or(tags::TRANSACTION_CURRENCY, tags::DEFAULT_CURRENCY_CODE);
    let country_code = text_or(tags::COUNTRY_CODE, tags::DEFAULT_COUNTRY_CODE);
    let initiation_method = text_or(tags::POINT_OF_INITIATION, tags::INITIATION_STATIC);

    Ok(ParsedQris {
        is_valid: true,
        merchant,
        amount,
        currency_code,
        country_code,
        initiation_method,
        original_payload: payload.to_string(),
        tlv_map,
        error_message: None,
    })
}

/// Decimal amount truncated toward zero; cents are dropped. Anything that is
/// not a finite number reads as 0.
fn parse_amount(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => {
            if !raw.trim().is_empty() {
                tracing::debug!(raw, "transaction amount is not a number, using 0");
            }
            0
        }
    }
}

/// Checks length, the presence of a CRC marker and the trailing checksum.
///
/// The checksum is recomputed over everything before the last four
/// characters. For a sealed payload that is the body followed by the `6304`
/// header, which is exactly what [`crate::emv::seal_with_checksum`] hashes.
pub fn is_well_formed(payload: &str) -> bool {
    let payload = payload.trim();

    if payload.chars().count() < MIN_PAYLOAD_LEN {
        tracing::debug!(length = payload.len(), "qris payload too short");
        return false;
    }

    if !payload.contains(CRC_MARKER) {
        tracing::debug!("qris payload has no crc marker");
        return false;
    }

    let split = payload.len() - CRC_HEX_LEN;
    let (Some(body), Some(provided)) = (payload.get(..split), payload.get(split..)) else {
        return false;
    };

    let expected = crc16_hex(body);
    let matches = provided.eq_ignore_ascii_case(&expected);
    if !matches {
        tracing::warn!(provided, expected = %expected, "qris checksum mismatch");
    }
    matches
}
