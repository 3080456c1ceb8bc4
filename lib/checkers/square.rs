use derive_more::{Display, Error, From};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{convert::TryFrom, str::FromStr};

/// A square of the board.
///
/// Row 0 is the edge where the dark pieces start.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", row, col)]
pub struct Square {
    #[cfg_attr(test, strategy(0i8..Square::SIZE))]
    row: i8,
    #[cfg_attr(test, strategy(0i8..Square::SIZE))]
    col: i8,
}

/// The reason why a pair of coordinates does not address a [`Square`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "`({}, {})` is off the board", row, col)]
pub struct OutOfBounds {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// The number of rows and of columns on the board.
    pub const SIZE: i8 = 8;

    /// Constructs [`Square`] from zero-based coordinates.
    pub fn new(row: i8, col: i8) -> Result<Self, OutOfBounds> {
        if Square::is_in_bounds(row, col) {
            Ok(Square { row, col })
        } else {
            Err(OutOfBounds { row, col })
        }
    }

    /// Whether `(row, col)` lies within `[0, 8) × [0, 8)`.
    pub fn is_in_bounds(row: i8, col: i8) -> bool {
        (0..Square::SIZE).contains(&row) && (0..Square::SIZE).contains(&col)
    }

    /// This square's row.
    pub fn row(&self) -> i8 {
        self.row
    }

    /// This square's column.
    pub fn col(&self) -> i8 {
        self.col
    }

    /// Whether pieces may ever stand on this square.
    pub fn is_playable(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square `rows` and `cols` away, if still on the board.
    pub fn offset(&self, rows: i8, cols: i8) -> Option<Self> {
        Square::new(self.row.checked_add(rows)?, self.col.checked_add(cols)?).ok()
    }

    /// Returns an iterator over all squares, row by row.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..Square::SIZE * Square::SIZE).map(|i| Square {
            row: i / Square::SIZE,
            col: i % Square::SIZE,
        })
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = OutOfBounds;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "expected two digits")]
    #[from(ignore)]
    InvalidSyntax,
    #[display(fmt = "{}", _0)]
    OutOfBounds(OutOfBounds),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = s.chars().map(|c| c.to_digit(10));

        match (digits.next(), digits.next(), digits.next()) {
            (Some(Some(r)), Some(Some(c)), None) => Ok(Square::new(r as i8, c as i8)?),
            _ => Err(ParseSquareError::InvalidSyntax),
        }
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}
