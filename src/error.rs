//! Start-up and top-level error types.
//!
//! Each module keeps its own error enum. `AppError` covers what can fail
//! before the UI starts; remote and state errors are logged where they occur.

pub use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A global logger was already installed.
    #[error("Logger error: {0}")]
    Logger(String),
}

pub type AppResult<T> = Result<T, AppError>;
