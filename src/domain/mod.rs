pub mod settings;
pub mod transaction;

pub use settings::MerchantSettings;
pub use transaction::QrisTransaction;
