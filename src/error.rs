//! Error types for the ADFGVX cipher library.

use thiserror::Error;

/// Errors produced by the ADFGVX cipher library.
///
/// Every variant is fatal for the call that produced it. The algorithms are
/// deterministic, so retrying with the same input cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdfgvxError {
    /// A normalized character has no cell in the Polybius square.
    #[error("Character {0} not found in the Polybius square")]
    SymbolNotFound(char),

    /// A fractionated pair contains a character outside the indicator alphabet.
    #[error("Invalid indicators: {0}")]
    InvalidIndicator(String),

    /// The fractionated stream or ciphertext has an impossible shape.
    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    /// A non-empty stream was given an empty transposition key.
    #[error("Transposition key must contain at least one character")]
    EmptyTranspositionKey,

    /// The variant name is neither `ADFGX` nor `ADFGVX`.
    #[error("Unknown cipher variant: {0}")]
    UnknownVariant(String),
}
