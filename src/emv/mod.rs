//! EMV merchant-presented QR primitives: the two-digit TLV text codec and the
//! CRC-16 seal that terminates every payload.

pub mod crc;
pub mod tags;
pub mod tlv;

pub use crc::{crc16, crc16_hex, seal_with_checksum};
pub use tlv::{decode, encode_field, TlvError, TlvMap};
