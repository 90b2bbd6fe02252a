pub mod bank;
pub mod error;

// Re-export commonly used types
pub use bank::BankConfig;
pub use error::ConfigError;
