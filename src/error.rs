//! Error types for the format-preserving encryption library.

use std::fmt;

/// Errors produced by the format-preserving encryption library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FpeError {
    /// Modulus encoding exceeds the maximum length the round function accepts.
    ModulusTooLarge { bytes: usize, max_bytes: usize },
    /// Modulus smaller than 2 leaves no domain to permute.
    ModulusTooSmall,
    /// Factor pair violated the `a >= b` contract.
    UnbalancedFactors,
    /// Value lies outside the domain declared for its type.
    OutOfRange(String),
}

impl fmt::Display for FpeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FpeError::ModulusTooLarge { bytes, max_bytes } => {
                write!(
                    f,
                    "modulus encoding is {} bytes, maximum is {} bytes",
                    bytes, max_bytes
                )
            }
            FpeError::ModulusTooSmall => write!(f, "modulus must be at least 2"),
            FpeError::UnbalancedFactors => {
                write!(f, "domain factors violate the a >= b contract")
            }
            FpeError::OutOfRange(msg) => write!(f, "value out of range: {}", msg),
        }
    }
}

impl std::error::Error for FpeError {}
