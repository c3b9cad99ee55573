use std::str::FromStr;

use super::error::FenError;
use super::piece::Piece;
use super::position::Position;
use super::types::Square;

impl Position {
    /// Parse the piece-placement field of a FEN string.
    ///
    /// Ranks are listed from rank 8 down to rank 1 and separated by `/`.
    /// Anything after the first whitespace (side to move, castling, ...) is
    /// ignored. The result has an empty move log and no captures.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut position = Position::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if c.is_ascii_digit() {
                    let run = c.to_digit(10).unwrap_or(0) as usize;
                    if !(1..=8).contains(&run) {
                        return Err(FenError::InvalidDigit { char: c });
                    }
                    file += run;
                    if file > 8 {
                        return Err(FenError::TooManyFiles { rank: rank + 1, files: file });
                    }
                } else {
                    let square = Square::new(rank, file).ok_or(FenError::TooManyFiles {
                        rank: rank + 1,
                        files: file + 1,
                    })?;
                    let piece = Piece::from_fen_char(c, square)
                        .map_err(|_| FenError::InvalidPiece { char: c })?;
                    position.set(square, Some(piece));
                    file += 1;
                }
            }
            if file < 8 {
                return Err(FenError::TooFewFiles { rank: rank + 1, files: file });
            }
        }

        Ok(position)
    }

    /// Parse a FEN placement field.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Piece-placement field for this position, rank 8 first.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match Square::new(rank, file).and_then(|sq| self.get(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
