//! ADFGX and ADFGVX field cipher engine.
//!
//! ADFGX (5×5, letters only, I/J merged) and ADFGVX (6×6, letters and
//! digits) are fractionating transposition ciphers: each plaintext symbol is
//! replaced by the row and column labels of its cell in a keyed Polybius
//! square, and the resulting stream is then shuffled by a keyed columnar
//! transposition.
//!
//! These ciphers were broken during the First World War and offer no
//! modern confidentiality.
//!
//! # Architecture
//!
//! ```text
//! Normalizer    (text → variant alphabet, spaces/digits → placeholder words)
//!     ↓
//! Square        (keyword → key-ordered Polybius square)
//!     ↓
//! Fractionator  (symbol ↔ indicator pair, e.g. 'T' ↔ "GD")
//!     ↓
//! Transposer    (keyed columnar transposition and its inverse)
//!     ↓
//! encrypt / decrypt / Cipher (orchestration)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with prepared keys:
//!
//! ```
//! use adfgvx::{decrypt, encrypt, Variant};
//!
//! let encrypted = encrypt("TEST", "BINGCHILLING", "KEY", Variant::Adfgvx).unwrap();
//! assert_eq!(encrypted.result, "DGDGGGDA");
//!
//! let decrypted = decrypt(&encrypted.result, "BINGCHILLING", "KEY", Variant::Adfgvx).unwrap();
//! assert_eq!(decrypted.result, "TEST");
//! ```
//!
//! Let a [`Cipher`] prepare raw, user-entered keys:
//!
//! ```
//! use adfgvx::{Cipher, Variant};
//!
//! let cipher = Cipher::new(Variant::Adfgx, "Petrklíček", "Providence");
//! let encrypted = cipher.encrypt("Meet at 19").unwrap();
//! assert_eq!(cipher.decrypt(&encrypted.result).unwrap().result, "MEET AT 19");
//! ```

#![deny(clippy::all)]

pub mod error;

mod cipher;
mod fractionator;
mod normalizer;
mod square;
mod transposer;
mod variant;

pub use cipher::{decrypt, encrypt, Cipher, CipherConfig, CipherOutput};
pub use error::AdfgvxError;
pub use fractionator::{defractionate, fractionate};
pub use normalizer::{
    normalize, prepare_square_key, prepare_transposition_key, revert_placeholders,
    DIGIT_PLACEHOLDERS, SPACE_PLACEHOLDER,
};
pub use square::Square;
pub use transposer::{column_order, detranspose, transpose, TranspositionGrid};
pub use variant::Variant;
