use crate::emv::tags;
use crate::qris::ParsedQris;

/// Masks a merchant PAN (or any identifier) for display and logging.
pub fn mask_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 8 {
        let visible: String = chars[..4].iter().collect();
        let end: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", visible, end)
    } else {
        "****".to_string()
    }
}

/// Copy of `parsed` with the merchant PAN masked, including inside the raw
/// merchant-account record and the original payload text.
pub fn redact_parsed(parsed: &ParsedQris) -> ParsedQris {
    let mut redacted = parsed.clone();

    if let Some(pan) = parsed.merchant.id.as_deref() {
        let masked = mask_value(pan);
        redacted.merchant.id = Some(masked.clone());

        if let Some(account) = redacted.tlv_map.get_mut(tags::MERCHANT_ACCOUNT) {
            *account = account.replace(pan, &masked);
        }
        redacted.original_payload = redacted.original_payload.replace(pan, &masked);
    }

    redacted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emv::{encode_field, seal_with_checksum};
    use crate::qris::parse;

    #[test]
    fn masks_long_values() {
        assert_eq!(mask_value("936000140000012345"), "9360****2345");
    }

    #[test]
    fn masks_short_values_entirely() {
        assert_eq!(mask_value("12345678"), "****");
        assert_eq!(mask_value(""), "****");
    }

    #[test]
    fn redacts_pan_in_merchant_and_raw_record() {
        let account = encode_field("00", "ID.CO.QRIS.WWW").unwrap()
            + &encode_field("01", "936000140000012345").unwrap();
        let body = encode_field("00", "01").unwrap() + &encode_field("26", &account).unwrap();
        let parsed = parse(&seal_with_checksum(&body));

        let redacted = redact_parsed(&parsed);

        assert_eq!(redacted.merchant.id.as_deref(), Some("9360****2345"));
        assert!(!redacted.tlv_map["26"].contains("936000140000012345"));
        assert!(!redacted.original_payload.contains("936000140000012345"));
        assert!(redacted.original_payload.contains("9360****2345"));
        assert_eq!(redacted.merchant.acquirer, parsed.merchant.acquirer);
    }
}
