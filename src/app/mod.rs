pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod shell;

// Re-export commonly used types
pub use error::AppError;
pub use logging::init_logging;
pub use shell::MenuShell;
