//! Error types for board and game operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for square access and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Coordinates outside the 8x8 grid (each must be 0-7)
    OutOfBounds { rank: usize, file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { rank, file } => {
                write!(f, "Square (rank {rank}, file {file}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for malformed piece construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// The kind, color or square given for a new piece is not usable
    InvalidArgument { reason: String },
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::InvalidArgument { reason } => {
                write!(f, "Invalid piece argument: {reason}")
            }
        }
    }
}

impl std::error::Error for PieceError {}

/// Error type for rejected moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Destination coordinates are off the board
    OffBoard { rank: usize, file: usize },
    /// No piece is selected
    NoSelection,
    /// Destination is the selected piece's own square
    SameSquare { square: Square },
    /// Destination is not among the selected piece's candidates
    NotReachable { from: Square, to: Square },
    /// Selected piece does not belong to the side to move
    NotYourTurn { color: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OffBoard { rank, file } => {
                write!(f, "Invalid move: (rank {rank}, file {file}) is off the board")
            }
            MoveError::NoSelection => write!(f, "Invalid move: no piece selected"),
            MoveError::SameSquare { square } => {
                write!(f, "Invalid move: piece already stands on {square}")
            }
            MoveError::NotReachable { from, to } => {
                write!(f, "Invalid move: {to} is not reachable from {from}")
            }
            MoveError::NotYourTurn { color } => {
                write!(f, "Invalid move: it is not {color}'s turn")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for FEN placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Empty input
    Empty,
    /// Placement field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement field
    InvalidPiece { char: char },
    /// Digit outside 1-8
    InvalidDigit { char: char },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Too few files in a rank
    TooFewFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidDigit { char } => {
                write!(f, "Invalid empty-run digit '{char}' in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}
