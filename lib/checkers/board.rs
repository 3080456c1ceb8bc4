use crate::checkers::{Color, ParsePieceError, Piece, Square};
use derive_more::{Display, Error, From};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Formatter, Write};
use std::{convert::TryFrom, ops::Index, str::FromStr};

/// The piece placement on the checkers board.
///
/// This type holds no rules; it only guarantees that every index is on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

// Deriving generates arrays of arbitrary pieces, including on squares that must stay empty.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        proptest::collection::vec(any::<Option<Piece>>(), 32)
            .prop_map(|v| {
                let mut board = Board::empty();
                for (sq, p) in Square::iter().filter(Square::is_playable).zip(v) {
                    board.set(sq, p);
                }

                board
            })
            .boxed()
    }
}

impl Default for Board {
    /// The standard starting layout.
    fn default() -> Self {
        let mut board = Board::empty();

        for sq in Square::iter().filter(Square::is_playable) {
            match sq.row() {
                0..=2 => board.set(sq, Some(Piece::man(Color::Dark))),
                5..=7 => board.set(sq, Some(Piece::man(Color::Light))),
                _ => None,
            };
        }

        board
    }
}

impl Board {
    /// A board without any pieces.
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Whether `(row, col)` addresses a square on the board.
    pub fn is_in_bounds(row: i8, col: i8) -> bool {
        Square::is_in_bounds(row, col)
    }

    /// The [`Piece`] on the given [`Square`], if any.
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Places a [`Piece`] on, or clears, the given [`Square`].
    ///
    /// Returns whatever occupied the square before.
    pub fn set(&mut self, sq: Square, p: Option<Piece>) -> Option<Piece> {
        debug_assert!(sq.is_playable() || p.is_none());
        std::mem::replace(&mut self.cells[sq.row() as usize][sq.col() as usize], p)
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| Some((sq, self.get(sq)?)))
    }

    /// The number of pieces of a [`Color`] on the board.
    pub fn count(&self, c: Color) -> usize {
        self.iter().filter(|(_, p)| p.color == c).count()
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq.row() as usize][sq.col() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.fmt_grid(f);
        }

        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_char('/')?;
            }

            for &p in row {
                f.write_char(p.map_or('.', char::from))?;
            }
        }

        Ok(())
    }
}

impl Board {
    fn fmt_grid(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..Square::SIZE {
            write!(f, "  {} ", col)?;
        }

        writeln!(f)?;
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} |", row)?;

            for p in cells {
                match p {
                    Some(p) => write!(f, " {} |", p)?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", row)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }

        write!(f, "  ")?;
        for col in 0..Square::SIZE {
            write!(f, "  {} ", col)?;
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum ParseBoardError {
    #[display(fmt = "expected 8 rows separated by `/`")]
    #[from(ignore)]
    WrongRowCount,

    #[display(fmt = "expected 8 cells in row {}", _0)]
    #[from(ignore)]
    WrongRowWidth(#[error(not(source))] i8),

    #[display(fmt = "pieces may only be placed on playable squares, not `{}`", _0)]
    #[from(ignore)]
    UnplayableSquare(#[error(not(source))] Square),

    #[display(fmt = "{}", _0)]
    InvalidPiece(ParsePieceError),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != Square::SIZE as usize {
            return Err(ParseBoardError::WrongRowCount);
        }

        let mut board = Board::empty();
        for (row, cells) in (0..).zip(rows) {
            if cells.chars().count() != Square::SIZE as usize {
                return Err(ParseBoardError::WrongRowWidth(row));
            }

            for (col, c) in (0..).zip(cells.chars()) {
                if c == '.' {
                    continue;
                }

                let p = Piece::try_from(c)?;
                let sq = Square::new(row, col).map_err(|_| ParseBoardError::WrongRowWidth(row))?;
                if !sq.is_playable() {
                    return Err(ParseBoardError::UnplayableSquare(sq));
                }

                board.set(sq, Some(p));
            }
        }

        Ok(board)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}
