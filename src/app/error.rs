use std::io;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level application errors.
///
/// Business failures (rejected withdrawals, unknown identities) never
/// reach this level; the shell turns those into messages and keeps
/// going. What remains is the environment: terminal I/O, config,
/// arguments.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            AppError::InvalidArguments("too many".to_string()).to_string(),
            "Invalid arguments: too many"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let app_err = AppError::from(io_err);

        match app_err {
            AppError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn config_error_conversion() {
        let config_err = ConfigError::Invalid {
            field: "branch_code".to_string(),
            reason: "must not be empty".to_string(),
        };
        let app_err = AppError::from(config_err);

        match app_err {
            AppError::Config(_) => {}
            _ => panic!("Expected Config error variant"),
        }
    }
}
