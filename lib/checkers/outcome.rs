use crate::checkers::{Board, Color};
use derive_more::Display;

/// The outcome of a finished checkers game.
///
/// A game ends only once one side has lost every piece.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "the {} player captured every opposing piece", _0)]
pub struct Outcome(Color);

impl Outcome {
    /// The outcome where the given side wins.
    pub fn new(winner: Color) -> Self {
        Outcome(winner)
    }

    /// The winning side.
    pub fn winner(&self) -> Color {
        self.0
    }

    /// Inspects the [`Board`] for a finished game.
    pub fn detect(board: &Board) -> Option<Self> {
        match (board.count(Color::Light), board.count(Color::Dark)) {
            (0, 0) => None,
            (_, 0) => Some(Outcome(Color::Light)),
            (0, _) => Some(Outcome(Color::Dark)),
            _ => None,
        }
    }
}
