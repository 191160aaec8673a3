//! Merchant preferences applied when generating payments.

use serde::{Deserialize, Serialize};

use crate::qris::{FeeType, MerchantOverrides};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantSettings {
    /// Static payload payments are generated from.
    pub qris_payload: Option<String>,
    /// Unset name and city fall through to the payload's own merchant.
    pub merchant_name: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_category: Option<String>,
    pub postal_code: Option<String>,
    pub fee_type: FeeType,
    pub fee_value: f64,
}

impl MerchantSettings {
    pub fn is_configured(&self) -> bool {
        self.qris_payload
            .as_deref()
            .is_some_and(|payload| !payload.trim().is_empty())
    }

    pub fn overrides(&self) -> MerchantOverrides {
        MerchantOverrides {
            name: self.merchant_name.clone(),
            city: self.merchant_city.clone(),
            post_code: self.postal_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_unconfigured() {
        let settings = MerchantSettings::default();
        assert!(!settings.is_configured());
        assert_eq!(settings.merchant_name, None);
        assert_eq!(settings.overrides(), MerchantOverrides::default());
    }

    #[test]
    fn blank_payload_is_unconfigured() {
        let settings = MerchantSettings {
            qris_payload: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!settings.is_configured());
    }

    #[test]
    fn overrides_carry_merchant_fields() {
        let settings = MerchantSettings {
            merchant_name: Some("KEDAI".to_string()),
            postal_code: Some("40111".to_string()),
            ..Default::default()
        };
        let overrides = settings.overrides();
        assert_eq!(overrides.name.as_deref(), Some("KEDAI"));
        assert_eq!(overrides.city, None);
        assert_eq!(overrides.post_code.as_deref(), Some("40111"));
    }
}
