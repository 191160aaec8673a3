pub mod adapters;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod emv;
pub mod error;
pub mod ports;
pub mod qris;
pub mod startup;
pub mod use_cases;
pub mod utils;
pub mod validation;

pub use emv::{crc16, decode, encode_field, seal_with_checksum, TlvError, TlvMap};
pub use error::AppError;
pub use qris::{
    final_amount, generate_dynamic, is_well_formed, parse, FeeType, GenerationError,
    MerchantInfo, MerchantOverrides, ParsedQris,
};
