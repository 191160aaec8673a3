pub mod in_memory;
pub mod postgres_settings_repository;
pub mod postgres_transaction_repository;

pub use in_memory::{InMemorySettingsRepository, InMemoryTransactionRepository};
pub use postgres_settings_repository::PostgresSettingsRepository;
pub use postgres_transaction_repository::PostgresTransactionRepository;
