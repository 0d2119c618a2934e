//! ADFGVX cipher engine.
//!
//! Chains normalization, square construction, fractionation and columnar
//! transposition for encryption, and the inverse chain for decryption.
//! Every call builds its own square; nothing is cached between calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::AdfgvxError;
use crate::fractionator::{defractionate, fractionate};
use crate::normalizer::{
    normalize, prepare_square_key, prepare_transposition_key, revert_placeholders,
};
use crate::square::Square;
use crate::transposer::{detranspose, transpose, TranspositionGrid};
use crate::variant::Variant;

/// Result of an encryption or decryption call.
///
/// `fractionated` is the intermediate indicator stream; `result` is the
/// ciphertext when encrypting and the plaintext when decrypting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherOutput {
    pub fractionated: String,
    pub result: String,
}

/// Encrypts `plain_text`.
///
/// Keys are used exactly as given. Use [`Cipher`] to prepare raw keys.
///
/// # Errors
/// - [`AdfgvxError::SymbolNotFound`] if a normalized character has no cell
///   in the square.
/// - [`AdfgvxError::EmptyTranspositionKey`] if the key is empty and there is
///   text to transpose.
///
/// # Examples
///
/// ```
/// use adfgvx::{encrypt, Variant};
///
/// let out = encrypt("TEST", "BINGCHILLING", "KEY", Variant::Adfgvx).unwrap();
/// assert_eq!(out.fractionated, "GDDGGAGD");
/// assert_eq!(out.result, "DGDGGGDA");
/// ```
pub fn encrypt(
    plain_text: &str,
    square_key: &str,
    transposition_key: &str,
    variant: Variant,
) -> Result<CipherOutput, AdfgvxError> {
    debug!(%variant, input_len = plain_text.len(), "encrypting");

    let normalized = normalize(plain_text, variant);
    trace!(normalized_len = normalized.len(), "normalized input");

    let square = Square::build(square_key, variant);
    let fractionated = fractionate(&normalized, &square).inspect_err(|e| {
        warn!(error = %e, "fractionation failed");
    })?;
    trace!(fractionated_len = fractionated.len(), "fractionated");

    let result = transpose(&fractionated, transposition_key).inspect_err(|e| {
        warn!(error = %e, "transposition failed");
    })?;

    debug!(output_len = result.len(), "encrypted");
    Ok(CipherOutput {
        fractionated,
        result,
    })
}

/// Decrypts `cipher_text`.
///
/// ASCII whitespace in the ciphertext (five-letter groups, line breaks) is
/// ignored. Placeholder words are reverted to the spaces and digits they
/// stand for.
///
/// Keys are used exactly as given and must match the encrypting keys.
/// A mismatched transposition key is not detected; it silently yields the
/// wrong plaintext.
///
/// # Errors
/// - [`AdfgvxError::MalformedCiphertext`] if the recovered stream has an
///   odd length.
/// - [`AdfgvxError::InvalidIndicator`] if the ciphertext holds a character
///   outside the variant's indicator alphabet.
/// - [`AdfgvxError::EmptyTranspositionKey`] if the key is empty and the
///   ciphertext is not.
///
/// # Examples
///
/// ```
/// use adfgvx::{decrypt, Variant};
///
/// let out = decrypt("DGDGG GDA", "BINGCHILLING", "KEY", Variant::Adfgvx).unwrap();
/// assert_eq!(out.fractionated, "GDDGGAGD");
/// assert_eq!(out.result, "TEST");
/// ```
pub fn decrypt(
    cipher_text: &str,
    square_key: &str,
    transposition_key: &str,
    variant: Variant,
) -> Result<CipherOutput, AdfgvxError> {
    debug!(%variant, input_len = cipher_text.len(), "decrypting");

    let compact = strip_whitespace(cipher_text);

    let square = Square::build(square_key, variant);
    let length = compact.chars().count();
    let fractionated = detranspose(&compact, transposition_key, length).inspect_err(|e| {
        warn!(error = %e, "detransposition failed");
    })?;
    trace!(fractionated_len = fractionated.len(), "detransposed");

    let normalized = defractionate(&fractionated, &square).inspect_err(|e| {
        warn!(error = %e, "defractionation failed");
    })?;
    let result = revert_placeholders(&normalized, variant);

    debug!(output_len = result.len(), "decrypted");
    Ok(CipherOutput {
        fractionated,
        result,
    })
}

/// Drops the group separators and line breaks of written ciphertext.
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// Keys and variant for a [`Cipher`], as read from a configuration source.
///
/// Keys are raw; [`Cipher::from_config`] prepares them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherConfig {
    pub variant: Variant,
    pub square_key: String,
    pub transposition_key: String,
}

/// An ADFGX/ADFGVX cipher bound to a pair of keys.
///
/// Raw keys are prepared once on construction: the square key is
/// normalized like plaintext, and the transposition key is normalized and
/// reduced to A–Z. Both sides of a conversation that construct a `Cipher`
/// from the same raw keys therefore agree on the column count and order.
///
/// # Examples
///
/// ```
/// use adfgvx::{Cipher, Variant};
///
/// let cipher = Cipher::new(Variant::Adfgx, "Petrklíček", "Providence");
/// let encrypted = cipher.encrypt("Attack at 5").unwrap();
/// let decrypted = cipher.decrypt(&encrypted.result).unwrap();
/// assert_eq!(decrypted.result, "ATTACK AT 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cipher {
    variant: Variant,
    square_key: String,
    transposition_key: String,
}

impl Cipher {
    /// Creates a cipher from raw, user-entered keys.
    pub fn new(variant: Variant, square_key: &str, transposition_key: &str) -> Self {
        Cipher {
            variant,
            square_key: prepare_square_key(square_key, variant),
            transposition_key: prepare_transposition_key(transposition_key, variant),
        }
    }

    /// Creates a cipher from a deserialized [`CipherConfig`].
    pub fn from_config(config: &CipherConfig) -> Self {
        Self::new(
            config.variant,
            &config.square_key,
            &config.transposition_key,
        )
    }

    /// Cipher variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Prepared square key.
    pub fn square_key(&self) -> &str {
        &self.square_key
    }

    /// Prepared transposition key.
    pub fn transposition_key(&self) -> &str {
        &self.transposition_key
    }

    /// Builds the Polybius square for the prepared key.
    pub fn square(&self) -> Square {
        Square::build(&self.square_key, self.variant)
    }

    /// Encrypts `plain_text`; see [`encrypt`].
    pub fn encrypt(&self, plain_text: &str) -> Result<CipherOutput, AdfgvxError> {
        encrypt(
            plain_text,
            &self.square_key,
            &self.transposition_key,
            self.variant,
        )
    }

    /// Decrypts `cipher_text`; see [`decrypt`].
    pub fn decrypt(&self, cipher_text: &str) -> Result<CipherOutput, AdfgvxError> {
        decrypt(
            cipher_text,
            &self.square_key,
            &self.transposition_key,
            self.variant,
        )
    }

    /// Transposition grid of a fractionated stream, as laid out when
    /// encrypting.
    pub fn encoding_grid(&self, fractionated: &str) -> Result<TranspositionGrid, AdfgvxError> {
        TranspositionGrid::encoding(fractionated, &self.transposition_key)
    }

    /// Transposition grid rebuilt from ciphertext, as laid out when
    /// decrypting.
    pub fn decoding_grid(&self, cipher_text: &str) -> Result<TranspositionGrid, AdfgvxError> {
        TranspositionGrid::decoding(&strip_whitespace(cipher_text), &self.transposition_key)
    }
}
