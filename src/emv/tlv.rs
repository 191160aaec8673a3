//! Tag-length-value codec over text.
//!
//! Each record is a two-character tag, a two-digit decimal length and the
//! value itself. Lengths count characters, not bytes.

use indexmap::IndexMap;
use thiserror::Error;

/// Decoded records keyed by tag, in first-seen order.
///
/// A repeated tag overwrites the earlier value but keeps its original slot.
pub type TlvMap = IndexMap<String, String>;

/// Tag (2) + length (2).
pub const HEADER_LEN: usize = 4;

/// Largest value the two-digit length field can describe.
pub const MAX_VALUE_LEN: usize = 99;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TlvError {
    #[error("value for tag {tag} is {length} characters long, the limit is 99")]
    ValueTooLong { tag: String, length: usize },
}

/// Encodes one record. Empty values are omitted entirely.
pub fn encode_field(tag: &str, value: &str) -> Result<String, TlvError> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let length = value.chars().count();
    if length > MAX_VALUE_LEN {
        return Err(TlvError::ValueTooLong {
            tag: tag.to_string(),
            length,
        });
    }

    Ok(format!("{}{:02}{}", tag, length, value))
}

/// Decodes records left to right.
///
/// Never fails: scanning stops at the first record whose length field is not
/// numeric or whose value runs past the end of the input, and everything
/// recovered up to that point is returned.
pub fn decode(payload: &str) -> TlvMap {
    let mut fields = TlvMap::new();
    let mut rest = payload;

    while has_header(rest) {
        let Some((tag, value, tail)) = next_record(rest) else {
            tracing::debug!(
                decoded = fields.len(),
                remaining = rest.len(),
                "tlv decode stopped at malformed record"
            );
            break;
        };

        fields.insert(tag.to_string(), value.to_string());
        rest = tail;
    }

    fields
}

/// At least a full header's worth of characters remains.
fn has_header(input: &str) -> bool {
    input.chars().nth(HEADER_LEN - 1).is_some()
}

fn next_record(input: &str) -> Option<(&str, &str, &str)> {
    let tag_end = char_offset(input, 2)?;
    let header_end = char_offset(input, HEADER_LEN)?;
    let tag = &input[..tag_end];
    let length_field = &input[tag_end..header_end];
    if !length_field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let length: usize = length_field.parse().ok()?;

    let body = &input[header_end..];
    let end = char_offset(body, length)?;
    Some((tag, &body[..end], &body[end..]))
}

/// Byte offset just past the first `count` characters of `s`.
fn char_offset(s: &str, count: usize) -> Option<usize> {
    s.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(s.len()))
        .nth(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_zero_padded_length() {
        assert_eq!(encode_field("00", "01").unwrap(), "000201");
        assert_eq!(
            encode_field("59", "WARUNG MAKAN SEDERHANA").unwrap(),
            "5922WARUNG MAKAN SEDERHANA"
        );
    }

    #[test]
    fn omits_empty_values() {
        assert_eq!(encode_field("61", "").unwrap(), "");
    }

    #[test]
    fn rejects_values_longer_than_two_digits_allow() {
        assert!(encode_field("62", &"A".repeat(99)).is_ok());

        let err = encode_field("62", &"A".repeat(100)).unwrap_err();
        assert_eq!(
            err,
            TlvError::ValueTooLong {
                tag: "62".to_string(),
                length: 100
            }
        );
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(encode_field("59", "KOPI É").unwrap(), "5906KOPI É");

        let decoded = decode("5906KOPI É6007BANDUNG");
        assert_eq!(decoded["59"], "KOPI É");
        assert_eq!(decoded["60"], "BANDUNG");
    }

    #[test]
    fn decodes_fields_in_order() {
        let decoded = decode("000201010211530336058");
        let tags: Vec<&str> = decoded.keys().map(String::as_str).collect();
        assert_eq!(tags, vec!["00", "01", "53"]);
        assert_eq!(decoded["53"], "360");
    }

    #[test]
    fn stops_at_non_numeric_length() {
        let decoded = decode("000201530336059XXMERCHANT6007JAKARTA");
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded["00"], "01");
        assert_eq!(decoded["53"], "360");
        assert!(!decoded.contains_key("59"));
        assert!(!decoded.contains_key("60"));
    }

    #[test]
    fn rejects_signed_length_field() {
        let decoded = decode("00020159-1AB");
        assert_eq!(decoded.len(), 1);
        let decoded = decode("00020159+1AB");
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn stops_at_truncated_value() {
        let decoded = decode("0002015920SHORT");
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded["00"], "01");
    }

    #[test]
    fn duplicate_tag_overwrites_in_place() {
        let decoded = decode("5903ABC6003XYZ5903DEF");
        let entries: Vec<(&str, &str)> = decoded
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(entries, vec![("59", "DEF"), ("60", "XYZ")]);
    }

    #[test]
    fn decodes_zero_length_record_at_the_end() {
        let decoded = decode("0002016300");
        assert_eq!(decoded["63"], "");
    }

    #[test]
    fn ignores_trailing_fragment_shorter_than_header() {
        let decoded = decode("000201630");
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn header_is_counted_in_characters() {
        assert!(decode("É00").is_empty());
        assert_eq!(decode("000201É00").len(), 1);

        let decoded = decode("ÉÉ03KOPI");
        assert_eq!(decoded["ÉÉ"], "KOP");
    }

    #[test]
    fn stops_at_non_ascii_length_field() {
        let decoded = decode("000201590É1ABC");
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn empty_input_decodes_to_empty_map() {
        assert!(decode("").is_empty());
    }
}
