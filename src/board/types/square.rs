//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as (rank, file).
///
/// Both coordinates are always in `0..8`; every constructor is checked, so a
/// `Square` value can never point off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SquareRepr", into = "SquareRepr"))]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// The square reached by stepping `d_rank` ranks and `d_file` files, or
    /// `None` when that leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_rank: isize, d_file: isize) -> Option<Self> {
        let r = self.rank as isize + d_rank;
        let f = self.file as isize + d_file;
        if r >= 0 && r < 8 && f >= 0 && f < 8 {
            Some(Square {
                rank: r as u8,
                file: f as u8,
            })
        } else {
            None
        }
    }

    /// Same rank, given file. Callers pass file constants in `0..8`.
    #[inline]
    #[must_use]
    pub(crate) fn with_file(self, file: usize) -> Self {
        debug_assert!(file < 8, "file {file} off the board");
        Square {
            rank: self.rank,
            file: file as u8,
        }
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Square::new(idx / 8, idx % 8)
        } else {
            None
        }
    }

    /// All 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, self.rank + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(rank, file).ok_or(SquareError::OutOfBounds { rank, file })
    }
}

/// Serialized form of a square. Deserializing goes through the bounds check.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct SquareRepr {
    rank: usize,
    file: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<SquareRepr> for Square {
    type Error = SquareError;

    fn try_from(repr: SquareRepr) -> Result<Self, Self::Error> {
        Square::try_from((repr.rank, repr.file))
    }
}

#[cfg(feature = "serde")]
impl From<Square> for SquareRepr {
    fn from(square: Square) -> Self {
        SquareRepr {
            rank: square.rank(),
            file: square.file(),
        }
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            c @ b'1'..=b'8' => (c - b'1') as usize,
            _ => return Err(invalid()),
        };

        Square::new(rank, file).ok_or_else(invalid)
    }
}
