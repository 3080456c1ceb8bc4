use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::{ops::Not, str::FromStr};

/// The color of a checkers [`Piece`][`crate::checkers::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}

impl Color {
    /// Both colors, in the order they move by default.
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    /// The sign of the row difference of a man's forward step.
    ///
    /// Light advances toward row 0, Dark toward row 7.
    pub fn forward(&self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// The row on which a man of this color is crowned.
    pub fn crowning_row(&self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// The reason why parsing [`Color`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "expected either `light` or `dark`")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Color::Light),
            "dark" => Ok(Color::Dark),
            _ => Err(ParseColorError),
        }
    }
}
