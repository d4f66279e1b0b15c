//! Coordinates and the command-token codec.
//!
//! A command token is one ASCII letter naming the column (`a` is column 0)
//! immediately followed by the zero-based row in decimal, e.g. `a5` is
//! column 0, row 5. Decoding is case-insensitive, encoding always produces
//! lowercase.

use alloc::string::String;
use core::fmt;

/// A cell on the grid, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub column: usize,
    pub row: usize,
}

/// Direction a vessel extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Column varies, row is fixed.
    Horizontal,
    /// Row varies, column is fixed.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

impl Coordinate {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// The coordinate `n` cells further along the varying axis of `orientation`.
    pub const fn step(self, orientation: Orientation, n: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.column + n, self.row),
            Orientation::Vertical => Self::new(self.column, self.row + n),
        }
    }

    /// Whether both components fall inside a `size`×`size` grid.
    pub const fn in_bounds(self, size: usize) -> bool {
        self.column < size && self.row < size
    }

    /// Lowercase command token for this coordinate.
    pub fn to_token(self) -> String {
        encode(self)
    }
}

impl fmt::Display for Coordinate {
    /// Columns past `z` have no token; they print as `[column]row`, which
    /// never decodes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match column_letter(self.column) {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            None => write!(f, "[{}]{}", self.column, self.row),
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Build from a `(column, row)` pair.
    fn from((column, row): (usize, usize)) -> Self {
        Self::new(column, row)
    }
}

const COLUMN_LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Letter naming `column`; `a` is column 0. `None` past `z`.
pub fn column_letter(column: usize) -> Option<char> {
    COLUMN_LETTERS.get(column).copied().map(char::from)
}

/// Encode a coordinate as `letter(column)` followed by the row.
pub fn encode(coord: Coordinate) -> String {
    alloc::format!("{}", coord)
}

/// True when `token` is one ASCII letter followed by one or more ASCII
/// digits and nothing else. Bounds are not checked.
pub fn is_well_formed(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes.split_first() {
        Some((first, digits)) => {
            first.is_ascii_alphabetic()
                && !digits.is_empty()
                && digits.iter().all(u8::is_ascii_digit)
        }
        None => false,
    }
}

/// Decode a command token against a `grid_size`×`grid_size` grid.
///
/// Returns `None` for malformed tokens, rows that do not fit a `usize`,
/// and columns or rows outside `[0, grid_size)`.
pub fn decode(token: &str, grid_size: usize) -> Option<Coordinate> {
    if !is_well_formed(token) {
        return None;
    }
    let letter = token.as_bytes()[0].to_ascii_lowercase();
    let column = (letter - b'a') as usize;
    let row: usize = token[1..].parse().ok()?;
    let coord = Coordinate::new(column, row);
    coord.in_bounds(grid_size).then_some(coord)
}
