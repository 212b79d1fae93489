//! A fixed-size cell set using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. An `N×N` grid
//! is packed into an unsigned integer `T`, one bit per cell in row-major
//! order, so iteration always yields cells sorted by `(row, col)`.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "{}x{} grid does not fit in {} bits", n, n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

/// A set of cells on an N×N grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    #[inline]
    fn bit((row, col): Coord) -> T {
        T::one() << (row * N + col)
    }

    /// Create an empty set without a size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// A set holding every cell of the grid.
    #[inline]
    pub fn full() -> Self {
        BitBoard { bits: Self::mask() }
    }

    /// Whether `coord` lies on the grid.
    #[inline]
    pub fn in_bounds((row, col): Coord) -> bool {
        row < N && col < N
    }

    #[inline]
    fn check_bounds(coord: Coord) -> Result<(), BitBoardError> {
        if Self::in_bounds(coord) {
            Ok(())
        } else {
            Err(BitBoardError::IndexOutOfBounds {
                row: coord.0,
                col: coord.1,
            })
        }
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test that treats off-grid cells as absent.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        Self::in_bounds(coord) && (self.bits & Self::bit(coord)) != T::zero()
    }

    /// Membership test that rejects off-grid cells.
    pub fn get(&self, coord: Coord) -> Result<bool, BitBoardError> {
        Self::check_bounds(coord)?;
        Ok((self.bits & Self::bit(coord)) != T::zero())
    }

    /// Adds `coord` to the set.
    pub fn set(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        Self::check_bounds(coord)?;
        self.bits = self.bits | Self::bit(coord);
        Ok(())
    }

    /// Removes `coord` from the set.
    pub fn clear(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        Self::check_bounds(coord)?;
        self.bits = self.bits & !Self::bit(coord);
        Ok(())
    }

    /// True when the two sets share no cell.
    #[inline]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        (self.bits & other.bits).is_zero()
    }

    /// True when every cell of `self` is also in `other`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        (self.bits & !other.bits).is_zero()
    }

    /// Builds a set from `(row, col)` positions.
    pub fn from_cells<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut board = Self::new();
        for coord in iter {
            board.set(coord)?;
        }
        Ok(board)
    }

    /// Iterator over the cells of the set in row-major order.
    #[inline]
    pub fn cells(&self) -> Cells<T, N> {
        Cells { bits: self.bits, idx: 0 }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.cells()).finish()
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let ch = if self.contains((r, c)) { '■' } else { '□' };
                write!(f, "{} ", ch)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the cells of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
