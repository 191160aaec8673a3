pub mod configure_merchant;
pub mod generate_payment;
pub mod payment_history;

pub use configure_merchant::{ConfigureMerchant, ConfigureMerchantInput};
pub use generate_payment::{GeneratePayment, GeneratePaymentInput, GeneratePaymentOutput};
pub use payment_history::PaymentHistory;
