/// Core error types for Tienda
use thiserror::Error;

/// Result type alias using `TiendaError`
pub type Result<T> = std::result::Result<T, TiendaError>;

/// Core error type for Tienda
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TiendaError {
    /// Invalid input (form validation)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TiendaError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
