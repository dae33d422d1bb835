//! Error types for oxcolor

use thiserror::Error;

/// Result type for oxcolor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxcolor operations
///
/// A web lookup miss is never an error: it falls back to the hex notation.
/// Only a secondary failure (the fallback string is not valid hex) surfaces.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Arithmetic operand is not a color or a 3-element sequence
    #[error("Unsupported operand for '{op}': expected 3 channels, got {len}")]
    InvalidOperand { op: char, len: usize },

    /// Hex string has an unsupported number of digits
    #[error("Malformed hex color '{0}': expected 3 or 6 digits")]
    MalformedHex(String),

    /// Hex string contains a character outside [0-9a-fA-F]
    #[error("Invalid hex digit in '{0}'")]
    InvalidHexDigit(String),

    /// Hue does not fall in any of the six HSV sectors
    #[error("Hue out of range: {0} (expected 0 <= h < 360)")]
    HueOutOfRange(f64),

    /// Interpolation step count cannot divide the range
    #[error("Invalid step count for color run: {0}")]
    InvalidSteps(usize),
}
