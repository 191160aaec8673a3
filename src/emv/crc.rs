//! CRC-16/CCITT-FALSE: seed 0xFFFF, polynomial 0x1021, MSB first, no
//! reflection, no final XOR.

use super::tags;

const SEED: u16 = 0xFFFF;
const POLYNOMIAL: u16 = 0x1021;

pub fn crc16(bytes: &[u8]) -> u16 {
    let mut crc = SEED;
    for &byte in bytes {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Checksum over the UTF-8 bytes of `payload` as four uppercase hex digits.
pub fn crc16_hex(payload: &str) -> String {
    format!("{:04X}", crc16(payload.as_bytes()))
}

/// Appends the `6304` CRC header to `body` and then the checksum computed over
/// the body including that header.
pub fn seal_with_checksum(body: &str) -> String {
    let mut sealed = String::with_capacity(body.len() + 8);
    sealed.push_str(body);
    sealed.push_str(tags::CRC);
    sealed.push_str(tags::CRC_LENGTH);

    let checksum = crc16_hex(&sealed);
    sealed.push_str(&checksum);
    sealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_standard_check_value() {
        assert_eq!(crc16(b"123456789"), 0x29B1);
    }

    #[test]
    fn empty_input_is_the_seed() {
        assert_eq!(crc16(b""), 0xFFFF);
        assert_eq!(crc16_hex(""), "FFFF");
    }

    #[test]
    fn hex_is_zero_padded_uppercase() {
        let hex = crc16_hex("000201010211");
        assert_eq!(hex.len(), 4);
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn seal_appends_crc_record() {
        let body = "000201010212";
        let sealed = seal_with_checksum(body);

        assert_eq!(sealed.len(), body.len() + 8);
        assert!(sealed.starts_with(body));
        assert_eq!(&sealed[body.len()..body.len() + 4], "6304");
        assert_eq!(&sealed[body.len() + 4..], crc16_hex(&format!("{}6304", body)));
    }
}
