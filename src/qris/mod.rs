//! QRIS payload interpretation, fee policy and dynamic payload generation.

pub mod fee;
pub mod generator;
pub mod parser;

pub use fee::{final_amount, FeeType, UnknownFeeType};
pub use generator::{generate_dynamic, GenerationError, MerchantOverrides};
pub use parser::{is_well_formed, parse, MerchantInfo, ParsedQris};
