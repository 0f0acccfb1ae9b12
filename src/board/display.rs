use std::fmt;

use super::{Board, Coord};

/// ASCII grid with Black's home rank on top, matching the row order.
///
/// Pieces use `Piece::to_char` (upper case White, lower case Black), empty
/// squares print `.` and highlighted empty squares print `*`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for y in 0..8 {
            write!(f, "{} |", 8 - y)?;
            for x in 0..8 {
                let square = self.square(Coord { x, y });
                let ch = match square.piece() {
                    Some(piece) => piece.to_char(),
                    None if square.is_available() => '*',
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f, "\n  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
