use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl AppError {
    /// Message text without the category prefix, as shown in the error block
    pub fn message(&self) -> &str {
        match self {
            AppError::Network(msg)
            | AppError::Parse(msg)
            | AppError::Config(msg)
            | AppError::System(msg)
            | AppError::Io(msg) => msg,
        }
    }
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::Network(msg) => {
            eprintln!("🌐 {}", OutputStyle::error(&format!("Network: {}", msg)));
        }
        AppError::Parse(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(&format!("Parse: {}", msg)));
        }
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::error(&format!("Config: {}", msg)));
        }
        AppError::Io(msg) | AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}
