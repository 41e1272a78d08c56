//! Error types for Cantor pairing.

use thiserror::Error;

/// Stable error codes for pairing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Negative operand
    InvalidInput,
    /// E002: Code does not depair to its operands
    Unpairable,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "E001",
            ErrorCode::Unpairable => "E002",
        }
    }
}

/// Error during pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PairError {
    #[error("[E001] invalid input ({a}, {b}): operands must be non-negative")]
    InvalidInput { a: i64, b: i64 },

    #[error("[E002] ({a}, {b}) cannot be paired: code exceeds the u64 code space")]
    Unpairable { a: i64, b: i64 },
}

impl PairError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PairError::InvalidInput { .. } => ErrorCode::InvalidInput,
            PairError::Unpairable { .. } => ErrorCode::Unpairable,
        }
    }

    /// Returns the operands the caller supplied.
    pub fn operands(&self) -> (i64, i64) {
        match *self {
            PairError::InvalidInput { a, b } | PairError::Unpairable { a, b } => (a, b),
        }
    }
}
