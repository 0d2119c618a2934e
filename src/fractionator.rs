//! Fractionation: symbols to indicator pairs and back.

use crate::error::AdfgvxError;
use crate::square::Square;

/// Replaces every symbol of `text` with its row and column indicators.
///
/// `text` is expected to be normalized for the square's variant.
///
/// # Parameters
/// - `text`: Normalized text.
/// - `square`: Polybius square supplying the coordinates.
///
/// # Returns
/// The fractionated stream, two indicators per input symbol.
///
/// # Errors
/// Returns [`AdfgvxError::SymbolNotFound`] for the first character that has
/// no cell in `square`. Nothing is emitted on failure.
///
/// # Examples
///
/// ```
/// use adfgvx::{fractionate, Square, Variant};
///
/// let square = Square::build("", Variant::Adfgx);
/// assert_eq!(fractionate("AZ", &square).unwrap(), "AAXX");
/// ```
pub fn fractionate(text: &str, square: &Square) -> Result<String, AdfgvxError> {
    let indicators = square.variant().indicators();
    let mut stream = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        let (row, col) = square
            .position(c)
            .ok_or(AdfgvxError::SymbolNotFound(c))?;
        stream.push(indicators[row]);
        stream.push(indicators[col]);
    }

    Ok(stream)
}

/// Turns a stream of indicator pairs back into square symbols.
///
/// # Parameters
/// - `stream`: Fractionated stream of indicator pairs.
/// - `square`: Polybius square used when fractionating.
///
/// # Returns
/// The normalized text, one symbol per pair.
///
/// # Errors
/// - [`AdfgvxError::MalformedCiphertext`] if the stream has an odd length.
/// - [`AdfgvxError::InvalidIndicator`] carrying the offending pair if
///   either character is not an indicator of the square's variant.
pub fn defractionate(stream: &str, square: &Square) -> Result<String, AdfgvxError> {
    let variant = square.variant();
    let chars: Vec<char> = stream.chars().collect();
    if !chars.len().is_multiple_of(2) {
        return Err(AdfgvxError::MalformedCiphertext(stream.to_string()));
    }

    let mut text = String::with_capacity(chars.len() / 2);
    for pair in chars.chunks_exact(2) {
        let row = variant.indicator_index(pair[0]);
        let col = variant.indicator_index(pair[1]);
        let symbol = match (row, col) {
            (Some(row), Some(col)) => square.get(row, col),
            _ => None,
        };
        match symbol {
            Some(symbol) => text.push(symbol),
            None => {
                return Err(AdfgvxError::InvalidIndicator(pair.iter().collect()));
            }
        }
    }

    Ok(text)
}
