//! Keyed columnar transposition.
//!
//! The stream is written row-major under the key, one column per key
//! character, and read back column by column in key order. The last row may
//! be short; absent cells contribute nothing, so no filler is ever added.
//!
//! Decoding has to rebuild the exact column lengths. The longer columns are
//! the leftmost ones in the key as written, while the ciphertext is sliced
//! in sorted key order:
//!
//! ```text
//! key      K E Y        sorted   E K Y
//! index    0 1 2        order    1 0 2
//!          G D D
//!          G G A        cipher   DGD GGG DA
//!          G D
//! ```

use crate::error::AdfgvxError;

/// Column read order for `key`.
///
/// `order[rank]` is the original column index of the column read at `rank`.
/// Columns are sorted by key character; repeated characters keep their
/// left-to-right order.
///
/// # Parameters
/// - `key`: Transposition key; its length is the column count.
///
/// # Returns
/// A permutation of `0..key.len()` in read order.
///
/// # Examples
///
/// ```
/// use adfgvx::column_order;
///
/// assert_eq!(column_order("KEY"), vec![1, 0, 2]);
/// assert_eq!(column_order("BABA"), vec![1, 3, 0, 2]);
/// ```
pub fn column_order(key: &str) -> Vec<usize> {
    let key: Vec<char> = key.chars().collect();
    let mut order: Vec<usize> = (0..key.len()).collect();
    // sort_by_key is stable: ties stay in original position order.
    order.sort_by_key(|&i| key[i]);
    order
}

/// Length of every original column when `total` characters fill
/// `num_cols` columns row-major.
fn column_lengths(total: usize, num_cols: usize) -> Vec<usize> {
    let base = total / num_cols;
    let extra = total % num_cols;
    (0..num_cols)
        .map(|col| if col < extra { base + 1 } else { base })
        .collect()
}

/// Slices column-ordered text back into original columns.
fn split_columns(chars: &[char], order: &[usize]) -> Vec<Vec<char>> {
    let lengths = column_lengths(chars.len(), order.len());
    let mut columns = vec![Vec::new(); order.len()];
    let mut offset = 0;
    for &col in order {
        let len = lengths[col];
        columns[col] = chars[offset..offset + len].to_vec();
        offset += len;
    }
    columns
}

/// Applies the columnar transposition under `key`.
///
/// # Parameters
/// - `stream`: Fractionated stream, written row-major under the key.
/// - `key`: Transposition key.
///
/// # Returns
/// The ciphertext, read column by column in [`column_order`].
///
/// # Errors
/// Returns [`AdfgvxError::EmptyTranspositionKey`] if `key` is empty and
/// `stream` is not.
///
/// # Examples
///
/// ```
/// use adfgvx::transpose;
///
/// assert_eq!(transpose("GDDGGAGD", "KEY").unwrap(), "DGDGGGDA");
/// ```
pub fn transpose(stream: &str, key: &str) -> Result<String, AdfgvxError> {
    let chars: Vec<char> = stream.chars().collect();
    if chars.is_empty() {
        return Ok(String::new());
    }
    let num_cols = key.chars().count();
    if num_cols == 0 {
        return Err(AdfgvxError::EmptyTranspositionKey);
    }

    let mut out = String::with_capacity(stream.len());
    for col in column_order(key) {
        out.extend(chars.iter().skip(col).step_by(num_cols));
    }
    Ok(out)
}

/// Inverts [`transpose`].
///
/// Only the first `original_length` characters of `ciphertext` are read.
///
/// # Parameters
/// - `ciphertext`: Output of [`transpose`].
/// - `key`: The transposition key used to encrypt.
/// - `original_length`: Number of characters in the transposed stream.
///
/// # Returns
/// The fractionated stream in its original row-major order.
///
/// # Errors
/// - [`AdfgvxError::MalformedCiphertext`] if `ciphertext` holds fewer than
///   `original_length` characters.
/// - [`AdfgvxError::EmptyTranspositionKey`] if `key` is empty and there is
///   something to decode.
///
/// # Examples
///
/// ```
/// use adfgvx::detranspose;
///
/// assert_eq!(detranspose("DGDGGGDA", "KEY", 8).unwrap(), "GDDGGAGD");
/// ```
pub fn detranspose(
    ciphertext: &str,
    key: &str,
    original_length: usize,
) -> Result<String, AdfgvxError> {
    let chars: Vec<char> = ciphertext.chars().take(original_length).collect();
    if chars.len() < original_length {
        return Err(AdfgvxError::MalformedCiphertext(ciphertext.to_string()));
    }
    if chars.is_empty() {
        return Ok(String::new());
    }
    if key.is_empty() {
        return Err(AdfgvxError::EmptyTranspositionKey);
    }

    let columns = split_columns(&chars, &column_order(key));
    let num_rows = columns.first().map_or(0, Vec::len);
    let mut out = String::with_capacity(ciphertext.len());
    for row in 0..num_rows {
        for column in &columns {
            if let Some(&c) = column.get(row) {
                out.push(c);
            }
        }
    }
    Ok(out)
}

/// The row-major transposition grid, for display.
///
/// Cells missing from a short last row are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionGrid {
    key: Vec<char>,
    order: Vec<usize>,
    rows: Vec<Vec<Option<char>>>,
}

impl TranspositionGrid {
    /// Lays a fractionated stream under `key`, as the encoder sees it.
    ///
    /// # Errors
    /// Returns [`AdfgvxError::EmptyTranspositionKey`] if `key` is empty and
    /// `stream` is not.
    pub fn encoding(stream: &str, key: &str) -> Result<Self, AdfgvxError> {
        let key_chars: Vec<char> = key.chars().collect();
        let chars: Vec<char> = stream.chars().collect();
        if key_chars.is_empty() && !chars.is_empty() {
            return Err(AdfgvxError::EmptyTranspositionKey);
        }

        let rows: Vec<Vec<Option<char>>> = chars
            .chunks(key_chars.len().max(1))
            .map(|chunk| {
                (0..key_chars.len())
                    .map(|col| chunk.get(col).copied())
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(TranspositionGrid {
            order: column_order(key),
            key: key_chars,
            rows,
        })
    }

    /// Rebuilds the grid from ciphertext, as the decoder sees it.
    ///
    /// # Errors
    /// Returns [`AdfgvxError::EmptyTranspositionKey`] if `key` is empty and
    /// `ciphertext` is not.
    pub fn decoding(ciphertext: &str, key: &str) -> Result<Self, AdfgvxError> {
        let key_chars: Vec<char> = key.chars().collect();
        let chars: Vec<char> = ciphertext.chars().collect();
        if chars.is_empty() {
            return Ok(TranspositionGrid {
                order: column_order(key),
                key: key_chars,
                rows: Vec::new(),
            });
        }
        if key_chars.is_empty() {
            return Err(AdfgvxError::EmptyTranspositionKey);
        }

        let order = column_order(key);
        let columns = split_columns(&chars, &order);
        let num_rows = columns.first().map_or(0, Vec::len);
        let rows: Vec<Vec<Option<char>>> = (0..num_rows)
            .map(|row| {
                columns
                    .iter()
                    .map(|col| col.get(row).copied())
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(TranspositionGrid {
            key: key_chars,
            order,
            rows,
        })
    }

    /// Key characters heading each column, as written.
    pub fn key(&self) -> &[char] {
        &self.key
    }

    /// Column read order; see [`column_order`].
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Option<char>>] {
        &self.rows
    }

    /// Reads the grid row by row, giving the fractionated stream.
    pub fn read_rows(&self) -> String {
        self.rows.iter().flatten().flatten().collect()
    }

    /// Reads the grid column by column in key order, giving the ciphertext.
    pub fn read_columns(&self) -> String {
        self.order
            .iter()
            .flat_map(|&col| self.rows.iter().filter_map(move |row| row[col]))
            .collect()
    }
}
