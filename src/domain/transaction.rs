//! Transaction history entity.
//! A generated payment together with what it was generated from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::qris::{final_amount, FeeType, MerchantInfo};

/// Domain entity representing one generated dynamic payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrisTransaction {
    pub id: Uuid,
    pub original_payload: String,
    pub generated_payload: Option<String>,
    /// Amount before fees.
    pub amount: i64,
    pub fee_type: FeeType,
    pub fee_value: f64,
    pub merchant: MerchantInfo,
    pub created_at: DateTime<Utc>,
}

impl QrisTransaction {
    pub fn new(
        original_payload: String,
        generated_payload: Option<String>,
        amount: i64,
        fee_type: FeeType,
        fee_value: f64,
        merchant: MerchantInfo,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_payload,
            generated_payload,
            amount,
            fee_type,
            fee_value,
            merchant,
            created_at: Utc::now(),
        }
    }

    /// Amount the payer is charged; the same figure encoded into the payload.
    pub fn final_amount(&self) -> i64 {
        final_amount(self.amount, self.fee_type, self.fee_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_amount_uses_fee_policy() {
        let tx = QrisTransaction::new(
            "static".to_string(),
            None,
            20_000,
            FeeType::Fixed,
            1_000.75,
            MerchantInfo::default(),
        );
        assert_eq!(tx.final_amount(), 21_000);
    }

    #[test]
    fn new_transactions_get_distinct_ids() {
        let a = QrisTransaction::new(String::new(), None, 1, FeeType::None, 0.0, MerchantInfo::default());
        let b = QrisTransaction::new(String::new(), None, 1, FeeType::None, 0.0, MerchantInfo::default());
        assert_ne!(a.id, b.id);
    }
}
