//! Input normalization onto a variant's symbol universe.
//!
//! Spaces (and, for ADFGX, digits) are spelled out as placeholder words
//! before anything is stripped, so they survive a letters-only pipeline and
//! can be restored after decryption with [`revert_placeholders`].

use crate::variant::Variant;

/// Placeholder word standing in for a space.
pub const SPACE_PLACEHOLDER: &str = "XMZRY";

/// Placeholder words standing in for the digits 0 through 9.
pub const DIGIT_PLACEHOLDERS: [&str; 10] = [
    "XZEROY", "XONEY", "XTWOY", "XTHREEY", "XFOURY", "XFIVEY", "XSIXY", "XSEVENY", "XEIGHTY",
    "XNINEY",
];

/// Maps text onto the symbol universe of `variant`.
///
/// Steps, in order:
/// 1. spaces become [`SPACE_PLACEHOLDER`]; for ADFGX digits become their
///    [`DIGIT_PLACEHOLDERS`] word;
/// 2. uppercase;
/// 3. accented Latin letters fold to their base letter;
/// 4. anything outside the universe's character classes is dropped
///    (A–Z for ADFGX, A–Z and 0–9 for ADFGVX);
/// 5. for ADFGX, J merges into I.
///
/// Empty input, or input with nothing left after stripping, yields an
/// empty string.
///
/// # Parameters
/// - `text`: Arbitrary user text.
/// - `variant`: Variant whose symbol universe the output must fit.
///
/// # Returns
/// The normalized text, containing only symbols of `variant`'s square.
///
/// # Examples
///
/// ```
/// use adfgvx::{normalize, Variant};
///
/// assert_eq!(normalize("Útok 19!", Variant::Adfgvx), "UTOKXMZRY19");
/// assert_eq!(normalize("jo 1", Variant::Adfgx), "IOXMZRYXONEY");
/// ```
pub fn normalize(text: &str, variant: Variant) -> String {
    let expanded = expand_placeholders(text, variant);
    let mut result = String::with_capacity(expanded.len());

    for c in expanded.chars().flat_map(char::to_uppercase) {
        let c = transliterate(c);
        let keep = match variant {
            Variant::Adfgx => c.is_ascii_uppercase(),
            Variant::Adfgvx => c.is_ascii_uppercase() || c.is_ascii_digit(),
        };
        if !keep {
            continue;
        }
        if variant == Variant::Adfgx && c == 'J' {
            result.push('I');
        } else {
            result.push(c);
        }
    }

    result
}

/// Restores the spaces and digits that [`normalize`] spelled out.
///
/// The space word is replaced first, then the digit words in order 0–9.
/// ADFGVX only expands spaces, so only the space word is restored for it.
///
/// # Parameters
/// - `text`: Decrypted, still normalized text.
/// - `variant`: Variant the text was normalized for.
///
/// # Returns
/// The text with placeholder words replaced by spaces and digits.
///
/// # Examples
///
/// ```
/// use adfgvx::{revert_placeholders, Variant};
///
/// assert_eq!(
///     revert_placeholders("ATXMZRYXFIVEY", Variant::Adfgx),
///     "AT 5"
/// );
/// assert_eq!(revert_placeholders("ATXMZRY5", Variant::Adfgvx), "AT 5");
/// ```
pub fn revert_placeholders(text: &str, variant: Variant) -> String {
    let mut result = text.replace(SPACE_PLACEHOLDER, " ");
    if variant.expands_digits() {
        for (digit, word) in DIGIT_PLACEHOLDERS.iter().enumerate() {
            if result.contains(word) {
                result = result.replace(word, &digit.to_string());
            }
        }
    }
    result
}

/// Prepares a raw Polybius square keyword.
///
/// The keyword goes through the same [`normalize`] pass as plaintext.
pub fn prepare_square_key(raw: &str, variant: Variant) -> String {
    normalize(raw, variant)
}

/// Prepares a raw transposition keyword.
///
/// After [`normalize`], everything but A–Z is removed, so the column count
/// and order agree between whoever encrypts and whoever decrypts.
///
/// # Examples
///
/// ```
/// use adfgvx::{prepare_transposition_key, Variant};
///
/// assert_eq!(prepare_transposition_key("Key 42", Variant::Adfgvx), "KEYXMZRY");
/// ```
pub fn prepare_transposition_key(raw: &str, variant: Variant) -> String {
    normalize(raw, variant)
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect()
}

fn expand_placeholders(text: &str, variant: Variant) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' ' => out.push_str(SPACE_PLACEHOLDER),
            '0'..='9' if variant.expands_digits() => {
                let digit = (c as u8 - b'0') as usize;
                out.push_str(DIGIT_PLACEHOLDERS[digit]);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Folds the supported accented capitals onto their base letter.
fn transliterate(c: char) -> char {
    match c {
        'Á' | 'À' | 'Â' | 'Ä' => 'A',
        'Č' => 'C',
        'Ď' => 'D',
        'É' | 'È' | 'Ê' | 'Ë' | 'Ě' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ň' => 'N',
        'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
        'Ř' => 'R',
        'Š' => 'S',
        'Ť' => 'T',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ý' => 'Y',
        'Ž' => 'Z',
        other => other,
    }
}
