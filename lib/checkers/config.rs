use crate::checkers::{Board, Color};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Runtime configuration for a [`Game`][`crate::checkers::Game`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename = "config", default)]
pub struct GameConfig {
    /// The side that moves first.
    pub starts: Color,

    /// The initial piece placement.
    pub board: Board,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starts: Color::Light,
            board: Board::default(),
        }
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`GameConfig`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse game configuration")]
pub struct ParseConfigError(ron::de::SpannedError);

impl FromStr for GameConfig {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
