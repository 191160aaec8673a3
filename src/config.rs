use anyhow::Context;
use dotenvy::dotenv;
use serde::Serialize;
use std::env;
use std::str::FromStr;

use crate::domain::MerchantSettings;
use crate::qris::FeeType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{}'", other),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// History and settings go to Postgres when set, otherwise they stay in memory.
    pub database_url: Option<String>,
    pub qris_payload: Option<String>,
    /// Name and city to encode; when unset the payload's own are kept.
    pub merchant_name: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_postal_code: Option<String>,
    pub merchant_category: Option<String>,
    pub fee_type: FeeType,
    pub fee_value: f64,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let fee_type = match var("FEE_TYPE") {
            Some(raw) => raw.parse::<FeeType>().context("invalid FEE_TYPE")?,
            None => FeeType::None,
        };

        let fee_value = match var("FEE_VALUE") {
            Some(raw) => raw
                .parse::<f64>()
                .with_context(|| format!("FEE_VALUE must be a number, got '{}'", raw))?,
            None => 0.0,
        };
        if !fee_value.is_finite() {
            anyhow::bail!("FEE_VALUE must be a finite number");
        }

        let log_format = match var("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::Text,
        };

        Ok(Config {
            database_url: var("DATABASE_URL"),
            qris_payload: var("QRIS_PAYLOAD"),
            merchant_name: var("MERCHANT_NAME"),
            merchant_city: var("MERCHANT_CITY"),
            merchant_postal_code: var("MERCHANT_POSTAL_CODE"),
            merchant_category: var("MERCHANT_CATEGORY"),
            fee_type,
            fee_value,
            log_format,
        })
    }

    /// Settings used until the merchant configures something else.
    pub fn merchant_settings(&self) -> MerchantSettings {
        MerchantSettings {
            qris_payload: self.qris_payload.clone(),
            merchant_name: self.merchant_name.clone(),
            merchant_city: self.merchant_city.clone(),
            merchant_category: self.merchant_category.clone(),
            postal_code: self.merchant_postal_code.clone(),
            fee_type: self.fee_type,
            fee_value: self.fee_value,
        }
    }
}
