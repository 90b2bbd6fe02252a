pub mod error;
pub mod report;
pub mod request;
pub mod session;
pub mod teller;

// Re-export commonly used types
pub use error::EngineError;
pub use report::{AccountSummary, Reply, SessionSnapshot, StatementReport};
pub use request::Request;
pub use session::Session;
pub use teller::Teller;
