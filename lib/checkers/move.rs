use crate::checkers::{ParseSquareError, Square};
use derive_more::{Constructor, Display, Error, From};
use std::str::FromStr;

/// A checkers move, from one [`Square`] to another.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}-{}", whence, whither)]
pub struct Move {
    whence: Square,
    whither: Square,
}

impl Move {
    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// The number of rows travelled, signed.
    pub fn row_diff(&self) -> i8 {
        self.whither.row() - self.whence.row()
    }

    /// The number of columns travelled, signed.
    pub fn col_diff(&self) -> i8 {
        self.whither.col() - self.whence.col()
    }

    /// The square halfway between source and destination, if there is one.
    pub fn midpoint(&self) -> Option<Square> {
        let (dr, dc) = (self.row_diff(), self.col_diff());
        if dr % 2 == 0 && dc % 2 == 0 {
            self.whence.offset(dr / 2, dc / 2)
        } else {
            None
        }
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "expected two squares separated by `-`")]
    #[from(ignore)]
    InvalidSyntax,
    #[display(fmt = "{}", _0)]
    InvalidSquare(ParseSquareError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whence, whither) = s.split_once('-').ok_or(ParseMoveError::InvalidSyntax)?;
        Ok(Move::new(whence.trim().parse()?, whither.trim().parse()?))
    }
}
