//! Errors returned by the conversion primitives.

use alloc::string::String;

/// Conversion errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Difficulty is negative, NaN or infinite.
    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(f64),
    /// Target is empty, has non-hex characters, or is wider than 256 bits.
    #[error("Invalid target format: {0:?}")]
    InvalidTargetFormat(String),
    /// Target parsed to zero, so no difficulty can be derived from it.
    #[error("Division by zero: target is zero")]
    DivisionByZero,
    /// The computed target does not fit in 256 bits.
    #[error("Target overflows 256 bits for difficulty {0}")]
    TargetOverflow(f64),
    /// Hex payload rejected by the decoder.
    #[error("Invalid hex: {0}")]
    InvalidHex(hex::FromHexError),
    /// A single character outside the hex alphabet.
    #[error("Bad hex character: {0:?}")]
    BadHexCharacter(char),
}
