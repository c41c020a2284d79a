use thiserror::Error;

/// Custom error type for the scalargrad engine and its network layer.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Invalid exponent {exponent}: pow only accepts finite real literals")]
    InvalidExponent { exponent: String },

    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Length mismatch: expected {expected}, got {actual} during operation {operation}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Operation {operation} received no inputs")]
    EmptyInput { operation: String },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid parameter at index {index}: {reason}")]
    InvalidParameter { index: usize, reason: String },

    #[error("Invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: String, value: f64 },
}
