//! Fee policy shared by display, generation and stored history.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeType {
    #[default]
    None,
    Fixed,
    Percentage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fee type '{0}', expected none, fixed or percentage")]
pub struct UnknownFeeType(pub String);

impl FeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeType::None => "none",
            FeeType::Fixed => "fixed",
            FeeType::Percentage => "percentage",
        }
    }
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeeType {
    type Err = UnknownFeeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(FeeType::None),
            "fixed" => Ok(FeeType::Fixed),
            "percentage" => Ok(FeeType::Percentage),
            _ => Err(UnknownFeeType(s.to_string())),
        }
    }
}

/// Amount to charge once the fee is applied.
///
/// Fees are truncated toward zero, never rounded. A fee never lowers the
/// amount: zero, negative or non-finite fee values add nothing.
pub fn final_amount(base: i64, fee_type: FeeType, fee_value: f64) -> i64 {
    let fee = match fee_type {
        FeeType::None => 0,
        FeeType::Fixed => fee_value.trunc() as i64,
        FeeType::Percentage => (base as f64 * fee_value / 100.0).trunc() as i64,
    };

    base.saturating_add(fee.max(0))
}
