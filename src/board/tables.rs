//! Precomputed on-board target sets for the fixed-offset pieces.

use once_cell::sync::Lazy;

use super::types::{Square, SquareSet};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Orthogonal ray directions (rank step, file step)
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions (rank step, file step)
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn leaper_table(deltas: &[(isize, isize)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for from in Square::all() {
        table[from.as_index()] = deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect();
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> =
    Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));
