//! Text rendering of pieces, the board and reserves.
//!
//! ```text
//! 3 □ |   |   |
//!  ───┼───┼───┼───
//! 2   | ● |   |
//!  ───┼───┼───┼───
//! 1   |   | ◇ |
//!  ───┼───┼───┼───
//! 0   |   |   | ▪
//!   0   1   2   3
//! ```

use std::fmt;

use crate::{Board, Coord, Inventory, Piece, Player, BOARD_SIZE};

/// Glyphs by owner, then size.
const GLYPHS: [[char; 4]; 2] = [['▫', '◇', '◯', '□'], ['▪', '◆', '●', '■']];

const ROW_SEPARATOR: &str = " ───┼───┼───┼───";

impl Piece {
    pub fn glyph(self) -> char {
        let owner = match self.owner() {
            Player::One => 0,
            Player::Two => 1,
        };
        GLYPHS[owner][self.size().index() as usize]
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

fn glyph_or_blank(piece: Option<Piece>) -> char {
    piece.map_or(' ', Piece::glyph)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            let cells: Vec<String> = (0..BOARD_SIZE)
                .map(|x| format!(" {} ", glyph_or_blank(self.top_at(Coord::at(x, y)))))
                .collect();
            writeln!(f, "{y}{}", cells.join("|"))?;
            if y > 0 {
                writeln!(f, "{ROW_SEPARATOR}")?;
            }
        }
        write!(f, "  0   1   2   3 ")
    }
}

/// Top piece of each reserve stack, left to right.
impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tops: Vec<String> = self.tops().into_iter().map(|p| glyph_or_blank(p).to_string()).collect();
        write!(f, "{}", tops.join("   "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;

    #[test]
    fn test_glyphs() {
        assert_eq!(Piece::of(Size::Tiny, Player::One).to_string(), "▫");
        assert_eq!(Piece::of(Size::Large, Player::One).to_string(), "□");
        assert_eq!(Piece::of(Size::Medium, Player::Two).to_string(), "●");
        assert_eq!(Piece::of(Size::Small, Player::Two).to_string(), "◆");
    }

    #[test]
    fn test_empty_board() {
        let row = |y: u8| format!("{y}   |   |   |   ");
        let expected = [
            row(3),
            ROW_SEPARATOR.to_string(),
            row(2),
            ROW_SEPARATOR.to_string(),
            row(1),
            ROW_SEPARATOR.to_string(),
            row(0),
            "  0   1   2   3 ".to_string(),
        ]
        .join("\n");
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn test_board_shows_top_pieces_only() {
        let mut board = Board::new();
        board.place(Coord::at(0, 3), Piece::of(Size::Tiny, Player::Two)).unwrap();
        board.place(Coord::at(0, 3), Piece::of(Size::Large, Player::One)).unwrap();
        board.place(Coord::at(3, 0), Piece::of(Size::Tiny, Player::Two)).unwrap();

        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "3 □ |   |   |   ");
        assert_eq!(lines[6], "0   |   |   | ▪ ");
        // The covered tiny piece at 0,3 is not drawn
        assert!(!lines[0].contains('▪'));
    }

    #[test]
    fn test_inventory() {
        let inv = Inventory::from_sizes(Player::Two, [&[Size::Tiny, Size::Medium], &[], &[Size::Large]]).unwrap();
        assert_eq!(inv.to_string(), format!("●   {}   ■", ' '));
        assert_eq!(Inventory::standard(Player::One).to_string(), "□   □   □");
    }
}
