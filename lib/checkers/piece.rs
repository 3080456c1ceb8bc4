use crate::checkers::Color;
use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::fmt::{self, Formatter, Write};

/// The rank of a checkers [`Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Role {
    #[display(fmt = "man")]
    Man,
    #[display(fmt = "king")]
    King,
}

/// A checkers piece of a certain [`Color`] and [`Role`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Color`] and [`Role`].
    pub fn new(color: Color, role: Role) -> Self {
        Piece { color, role }
    }

    /// An uncrowned piece of the given [`Color`].
    pub fn man(color: Color) -> Self {
        Piece::new(color, Role::Man)
    }

    /// A crowned piece of the given [`Color`].
    pub fn king(color: Color) -> Self {
        Piece::new(color, Role::King)
    }

    /// Whether this piece has been crowned.
    pub fn is_king(&self) -> bool {
        self.role == Role::King
    }

    /// This piece after being crowned.
    pub fn crowned(self) -> Self {
        Piece::king(self.color)
    }

    /// Whether this piece may travel `row_diff` rows.
    ///
    /// Kings move along either diagonal direction, men only forward.
    pub fn is_valid_direction(&self, row_diff: i8) -> bool {
        self.is_king() || row_diff.signum() == self.color.forward()
    }

    /// Whether this piece gets crowned by landing on `row`.
    pub fn crowns_on(&self, row: i8) -> bool {
        !self.is_king() && row == self.color.crowning_row()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

impl From<Piece> for char {
    fn from(p: Piece) -> char {
        match (p.color, p.role) {
            (Color::Light, Role::Man) => 'l',
            (Color::Light, Role::King) => 'L',
            (Color::Dark, Role::Man) => 'd',
            (Color::Dark, Role::King) => 'D',
        }
    }
}

/// The reason why converting [`Piece`] from a character failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "expected one of `l`, `L`, `d`, or `D`")]
pub struct ParsePieceError;

impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'l' => Ok(Piece::man(Color::Light)),
            'L' => Ok(Piece::king(Color::Light)),
            'd' => Ok(Piece::man(Color::Dark)),
            'D' => Ok(Piece::king(Color::Dark)),
            _ => Err(ParsePieceError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn piece_has_a_color_and_a_role(c: Color, r: Role) {
        let p = Piece::new(c, r);
        assert_eq!(p.color, c);
        assert_eq!(p.role, r);
    }

    #[proptest]
    fn crowning_keeps_the_color(p: Piece) {
        assert_eq!(p.crowned().color, p.color);
        assert!(p.crowned().is_king());
    }

    #[proptest]
    fn kings_move_in_either_direction(c: Color, #[filter(#d != 0)] d: i8) {
        assert!(Piece::king(c).is_valid_direction(d));
    }

    #[proptest]
    fn light_men_only_move_toward_row_zero(#[filter(#d != 0)] d: i8) {
        assert_eq!(Piece::man(Color::Light).is_valid_direction(d), d < 0);
    }

    #[proptest]
    fn dark_men_only_move_toward_row_seven(#[filter(#d != 0)] d: i8) {
        assert_eq!(Piece::man(Color::Dark).is_valid_direction(d), d > 0);
    }

    #[proptest]
    fn men_are_crowned_on_the_far_row(c: Color, #[strategy(0i8..8)] row: i8) {
        assert_eq!(Piece::man(c).crowns_on(row), row == c.crowning_row());
    }

    #[proptest]
    fn kings_are_never_crowned_again(c: Color, #[strategy(0i8..8)] row: i8) {
        assert!(!Piece::king(c).crowns_on(row));
    }

    #[proptest]
    fn converting_printed_piece_is_an_identity(p: Piece) {
        assert_eq!(Piece::try_from(char::from(p)), Ok(p));
    }

    #[proptest]
    fn converting_piece_fails_for_unknown_characters(
        #[filter(!['l', 'L', 'd', 'D'].contains(&#c))] c: char,
    ) {
        assert_eq!(Piece::try_from(c), Err(ParsePieceError));
    }
}
