//! A square bitboard sized at runtime.
//!
//! Cells of an `N×N` grid are packed row-major into a vector of unsigned
//! words `T`. Used for the occupied-cell set of a grid and for guess
//! tracking, giving constant-time membership tests.

use alloc::vec;
use alloc::vec::Vec;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};

use crate::coord::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Coordinate lies outside `[0..N)` on either axis.
    OutOfBounds(Coordinate),
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::OutOfBounds(c) => {
                write!(f, "OutOfBounds: column={}, row={}", c.column, c.row)
            }
        }
    }
}

/// An `N×N` bitboard stored in words of `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitBoard<T = u64>
where
    T: PrimInt + Unsigned,
{
    size: usize,
    words: Vec<T>,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned,
{
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        let len = cells.div_ceil(Self::WORD_BITS);
        BitBoard {
            size,
            words: vec![T::zero(); len],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board (`N * N`).
    pub fn capacity(&self) -> usize {
        self.size * self.size
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// True when every cell is set.
    pub fn is_full(&self) -> bool {
        self.count_ones() == self.capacity()
    }

    /// Gets the bit at `coord`.
    pub fn get(&self, coord: Coordinate) -> Result<bool, BitBoardError> {
        let (word, bit) = self.locate(coord)?;
        Ok(((self.words[word] >> bit) & T::one()) != T::zero())
    }

    /// Like [`get`](Self::get) but treats out-of-bounds cells as unset.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Sets the bit at `coord`.
    pub fn set(&mut self, coord: Coordinate) -> Result<(), BitBoardError> {
        let (word, bit) = self.locate(coord)?;
        self.words[word] = self.words[word] | (T::one() << bit);
        Ok(())
    }

    /// Clears the bit at `coord`.
    pub fn clear(&mut self, coord: Coordinate) -> Result<(), BitBoardError> {
        let (word, bit) = self.locate(coord)?;
        self.words[word] = self.words[word] & !(T::one() << bit);
        Ok(())
    }

    /// True if any cell in `cells` is set.
    pub fn any<I>(&self, cells: I) -> bool
    where
        I: IntoIterator<Item = Coordinate>,
    {
        cells.into_iter().any(|c| self.contains(c))
    }

    /// Iterator over the set cells in row-major order.
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits { board: self, idx: 0 }
    }

    fn locate(&self, coord: Coordinate) -> Result<(usize, usize), BitBoardError> {
        if !coord.in_bounds(self.size) {
            return Err(BitBoardError::OutOfBounds(coord));
        }
        let idx = coord.row * self.size + coord.column;
        Ok((idx / Self::WORD_BITS, idx % Self::WORD_BITS))
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", self.size)?;
        for row in 0..self.size {
            for column in 0..self.size {
                let bit = if self.contains(Coordinate::new(column, row)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<T> Iterator for SetBits<'_, T>
where
    T: PrimInt + Unsigned,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.board.size;
        while self.idx < size * size {
            let idx = self.idx;
            self.idx += 1;
            let coord = Coordinate::new(idx % size, idx / size);
            if self.board.contains(coord) {
                return Some(coord);
            }
        }
        None
    }
}
