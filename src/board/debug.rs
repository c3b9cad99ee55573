use super::position::Position;
use super::types::Square;

const FILE_HEADER: &str = "  a b c d e f g h";

impl Position {
    /// Text dump of the grid in storage order: rank 1 is the first row.
    ///
    /// Occupied cells show the piece's FEN letter, empty cells a `.`.
    /// This is a debugging aid and is not oriented like a printed board.
    #[must_use]
    pub fn to_board_string(&self) -> String {
        let mut out = String::with_capacity(200);
        out.push_str(FILE_HEADER);
        out.push('\n');
        for rank in 0..8 {
            out.push_str(&(rank + 1).to_string());
            for file in 0..8 {
                out.push(' ');
                let cell = Square::new(rank, file)
                    .and_then(|sq| self.get(sq))
                    .map_or('.', |p| p.fen_char());
                out.push(cell);
            }
            out.push('\n');
        }
        out.push_str(FILE_HEADER);
        out
    }
}
