use thiserror::Error;

/// Main error type for the TailCast system
#[derive(Error, Debug)]
pub enum TcError {
    #[error("Insufficient data: {message}")]
    InsufficientData { message: String },

    #[error("Invalid parameter {parameter}: {message}")]
    InvalidParameter { parameter: String, message: String },

    #[error("Invalid price at index {index}: {value}")]
    InvalidPrice { index: usize, value: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for TailCast operations
pub type TcResult<T> = Result<T, TcError>;

/// Macro for creating insufficient-data errors
#[macro_export]
macro_rules! insufficient_data {
    ($($arg:tt)*) => {
        $crate::errors::TcError::InsufficientData {
            message: format!($($arg)*),
        }
    };
}

/// Macro for creating invalid-parameter errors
#[macro_export]
macro_rules! invalid_parameter {
    ($param:expr, $($arg:tt)*) => {
        $crate::errors::TcError::InvalidParameter {
            parameter: $param.to_string(),
            message: format!($($arg)*),
        }
    };
}
