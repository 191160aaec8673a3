//! Tag identifiers and default values of the QRIS profile.

pub const PAYLOAD_FORMAT: &str = "00";
pub const POINT_OF_INITIATION: &str = "01";
pub const MERCHANT_ACCOUNT: &str = "26";
pub const MERCHANT_ACCOUNT_DOMESTIC: &str = "51";
pub const MERCHANT_CATEGORY: &str = "52";
pub const TRANSACTION_CURRENCY: &str = "53";
pub const TRANSACTION_AMOUNT: &str = "54";
pub const COUNTRY_CODE: &str = "58";
pub const MERCHANT_NAME: &str = "59";
pub const MERCHANT_CITY: &str = "60";
pub const POSTAL_CODE: &str = "61";
pub const ADDITIONAL_DATA: &str = "62";
pub const CRC: &str = "63";

/// Length field of the CRC record; the checksum is always four hex digits.
pub const CRC_LENGTH: &str = "04";

/// Sub-tags nested under [`MERCHANT_ACCOUNT`].
pub mod merchant_account {
    pub const GLOBAL_UNIQUE_ID: &str = "00";
    pub const MERCHANT_PAN: &str = "01";
}

pub const PAYLOAD_FORMAT_VERSION: &str = "01";
pub const INITIATION_STATIC: &str = "11";
pub const INITIATION_DYNAMIC: &str = "12";

pub const DEFAULT_MERCHANT_NAME: &str = "TEST MERCHANT";
pub const DEFAULT_MERCHANT_CITY: &str = "JAKARTA";
pub const DEFAULT_COUNTRY_CODE: &str = "ID";
/// ISO 4217 numeric code for IDR.
pub const DEFAULT_CURRENCY_CODE: &str = "360";
