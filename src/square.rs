//! Key-ordered Polybius square.

use std::fmt;

use crate::variant::Variant;

/// A fully populated `dimension × dimension` Polybius square.
///
/// Every symbol of the variant's universe occupies exactly one cell.
/// Squares are cheap to build and are rebuilt from the keyword on every
/// encryption or decryption call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    variant: Variant,
    cells: Vec<char>,
}

impl Square {
    /// Builds the square for `key`.
    ///
    /// Distinct key characters that belong to the universe are placed first,
    /// row-major, in order of first occurrence; the remaining universe
    /// symbols follow in their natural order. Key characters outside the
    /// universe are skipped.
    ///
    /// # Parameters
    /// - `key`: Square keyword, ideally prepared with `prepare_square_key`.
    /// - `variant`: Variant fixing the dimension and symbol universe.
    ///
    /// # Returns
    /// A fully populated square holding each universe symbol once.
    ///
    /// # Examples
    ///
    /// ```
    /// use adfgvx::{Square, Variant};
    ///
    /// let square = Square::build("BINGCHILLING", Variant::Adfgvx);
    /// assert_eq!(square.row(0), Some(&['B', 'I', 'N', 'G', 'C', 'H'][..]));
    /// assert_eq!(square.row(1), Some(&['L', 'A', 'D', 'E', 'F', 'J'][..]));
    /// ```
    pub fn build(key: &str, variant: Variant) -> Self {
        let dim = variant.dimension();
        let universe = variant.universe();
        debug_assert_eq!(universe.chars().count(), dim * dim);

        let mut cells: Vec<char> = Vec::with_capacity(dim * dim);
        for c in key.chars().chain(universe.chars()) {
            if cells.len() == dim * dim {
                break;
            }
            if variant.contains(c) && !cells.contains(&c) {
                cells.push(c);
            }
        }

        Square { variant, cells }
    }

    /// Variant this square was built for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Side length of the square.
    pub fn dimension(&self) -> usize {
        self.variant.dimension()
    }

    /// Symbol at (`row`, `col`), both 0-indexed.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        let dim = self.dimension();
        if row >= dim || col >= dim {
            return None;
        }
        self.cells.get(row * dim + col).copied()
    }

    /// Row-major position of `symbol`, if the square holds it.
    pub fn position(&self, symbol: char) -> Option<(usize, usize)> {
        let dim = self.dimension();
        self.cells
            .iter()
            .position(|&c| c == symbol)
            .map(|i| (i / dim, i % dim))
    }

    /// One row of the square.
    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.cells.chunks(self.dimension()).nth(row)
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.dimension())
    }

    /// Rows as single-character strings, ready for a display layer.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }
}

/// Renders the square with indicator labels on both axes.
///
/// ```text
///   A D F G X
/// A B I N G C
/// D H L A D E
/// ...
/// ```
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indicators = self.variant.indicators();
        write!(f, " ")?;
        for ind in indicators {
            write!(f, " {}", ind)?;
        }
        for (ind, row) in indicators.iter().zip(self.rows()) {
            writeln!(f)?;
            write!(f, "{}", ind)?;
            for c in row {
                write!(f, " {}", c)?;
            }
        }
        Ok(())
    }
}
