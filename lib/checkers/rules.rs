use crate::checkers::{Board, Color, Move, OutOfBounds, Piece, Square};
use derive_more::{Display, Error, From};

/// The reason why a [`Move`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum IllegalMove {
    #[display(fmt = "{}", _0)]
    OutOfBounds(OutOfBounds),

    #[display(fmt = "there is no piece on `{}`", _0)]
    #[from(ignore)]
    NoPieceAtSource(#[error(not(source))] Square),

    #[display(fmt = "it is the {} player's turn", _0)]
    #[from(ignore)]
    WrongSideToMove(#[error(not(source))] Color),

    #[display(fmt = "square `{}` is occupied", _0)]
    #[from(ignore)]
    DestinationOccupied(#[error(not(source))] Square),

    #[display(fmt = "move `{}` is neither a diagonal step nor a diagonal jump", _0)]
    #[from(ignore)]
    IllegalGeometry(#[error(not(source))] Move),

    #[display(fmt = "men may not move backward, as in `{}`", _0)]
    #[from(ignore)]
    IllegalDirection(#[error(not(source))] Move),

    #[display(fmt = "there is no opposing piece to capture on `{}`", _0)]
    #[from(ignore)]
    NoEnemyAtMidpoint(#[error(not(source))] Square),

    #[display(fmt = "the piece on `{}` must capture again", _0)]
    #[from(ignore)]
    ContinuationPending(#[error(not(source))] Square),
}

/// The shape of a valid [`Move`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveKind {
    /// A one-square diagonal step.
    #[display(fmt = "step")]
    Step,

    /// A two-square diagonal jump over the piece on the given [`Square`].
    #[display(fmt = "capture on {}", _0)]
    Capture(Square),
}

/// What playing a [`Move`] did to the [`Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Change {
    /// The moved piece, as it was before moving.
    pub piece: Piece,
    /// The captured piece and where it stood.
    pub captured: Option<(Square, Piece)>,
    /// Whether the moved piece was crowned on landing.
    pub promoted: bool,
}

impl Change {
    /// The moved piece, as it is after moving.
    pub fn landed(&self) -> Piece {
        if self.promoted {
            self.piece.crowned()
        } else {
            self.piece
        }
    }
}

const STEPS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const JUMPS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

impl Board {
    fn check(&self, m: Move) -> Result<(Piece, MoveKind), IllegalMove> {
        use IllegalMove::*;

        let piece = self[m.whence()].ok_or(NoPieceAtSource(m.whence()))?;

        if self[m.whither()].is_some() {
            return Err(DestinationOccupied(m.whither()));
        }

        let kind = match (m.row_diff().abs(), m.col_diff().abs()) {
            (1, 1) => MoveKind::Step,
            (2, 2) => match m.midpoint() {
                Some(mid) if self[mid].is_some_and(|p| p.color != piece.color) => {
                    MoveKind::Capture(mid)
                }
                Some(mid) => return Err(NoEnemyAtMidpoint(mid)),
                None => return Err(IllegalGeometry(m)),
            },
            _ => return Err(IllegalGeometry(m)),
        };

        if !piece.is_valid_direction(m.row_diff()) {
            return Err(IllegalDirection(m));
        }

        Ok((piece, kind))
    }

    /// Validates a [`Move`] against the rules of movement.
    ///
    /// Whose turn it is does not matter here.
    pub fn validate(&self, m: Move) -> Result<MoveKind, IllegalMove> {
        Ok(self.check(m)?.1)
    }

    /// Valid moves of the piece on the given [`Square`].
    pub fn moves_from(&self, sq: Square) -> impl Iterator<Item = (Move, MoveKind)> + '_ {
        STEPS.into_iter().chain(JUMPS).filter_map(move |(dr, dc)| {
            let m = Move::new(sq, sq.offset(dr, dc)?);
            Some((m, self.validate(m).ok()?))
        })
    }

    /// Whether the piece on the given [`Square`] is able to capture.
    pub fn can_capture_from(&self, sq: Square) -> bool {
        JUMPS.into_iter().any(|(dr, dc)| match sq.offset(dr, dc) {
            Some(to) => self.validate(Move::new(sq, to)).is_ok(),
            None => false,
        })
    }

    /// Validates and plays a [`Move`], crowning the piece if it reaches the far row.
    ///
    /// The board is left untouched if the move is rejected.
    pub fn play(&mut self, m: Move) -> Result<Change, IllegalMove> {
        let (piece, kind) = self.check(m)?;

        let captured = match kind {
            MoveKind::Step => None,
            MoveKind::Capture(sq) => self.set(sq, None).map(|p| (sq, p)),
        };

        let change = Change {
            piece,
            captured,
            promoted: piece.crowns_on(m.whither().row()),
        };

        self.set(m.whence(), None);
        self.set(m.whither(), Some(change.landed()));

        Ok(change)
    }

    /// Takes back a [`Move`] previously played.
    pub fn revert(&mut self, m: Move, change: &Change) {
        self.set(m.whither(), None);
        self.set(m.whence(), Some(change.piece));

        if let Some((sq, p)) = change.captured {
            self.set(sq, Some(p));
        }
    }

    /// Plays again a [`Move`] previously taken back.
    pub fn replay(&mut self, m: Move, change: &Change) {
        self.set(m.whence(), None);

        if let Some((sq, _)) = change.captured {
            self.set(sq, None);
        }

        self.set(m.whither(), Some(change.landed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::Role;
    use proptest::{prop_assume, sample::select, sample::Selector};
    use test_strategy::proptest;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn mv(from: (i8, i8), to: (i8, i8)) -> Move {
        Move::new(sq(from.0, from.1), sq(to.0, to.1))
    }

    fn board(pieces: &[((i8, i8), Piece)]) -> Board {
        let mut b = Board::empty();
        for &((r, c), p) in pieces {
            b.set(sq(r, c), Some(p));
        }

        b
    }

    fn valid_moves(b: &Board) -> Vec<(Move, MoveKind)> {
        Square::iter().flat_map(|s| b.moves_from(s)).collect()
    }

    #[proptest]
    fn moving_from_an_empty_square_is_illegal(
        #[by_ref] b: Board,
        #[filter(#b[#m.whence()].is_none())] m: Move,
    ) {
        assert_eq!(
            b.validate(m),
            Err(IllegalMove::NoPieceAtSource(m.whence()))
        );
    }

    #[proptest]
    fn moving_onto_an_occupied_square_is_illegal(
        #[filter(#b.iter().count() > 0)] b: Board,
        x: Selector,
        y: Selector,
    ) {
        let (whence, _) = x.select(b.iter());
        let (whither, _) = y.select(b.iter());

        assert_eq!(
            b.validate(Move::new(whence, whither)),
            Err(IllegalMove::DestinationOccupied(whither))
        );
    }

    #[proptest]
    fn only_diagonal_steps_and_jumps_are_valid(b: Board) {
        for (m, kind) in valid_moves(&b) {
            let diff = (m.row_diff().abs(), m.col_diff().abs());
            match kind {
                MoveKind::Step => assert_eq!(diff, (1, 1)),
                MoveKind::Capture(_) => assert_eq!(diff, (2, 2)),
            }
        }
    }

    #[proptest]
    fn men_only_move_forward(b: Board) {
        for (m, _) in valid_moves(&b) {
            let p = b[m.whence()].unwrap();
            if !p.is_king() {
                assert_eq!(m.row_diff().signum(), p.color.forward());
            }
        }
    }

    #[proptest]
    fn playing_an_invalid_move_leaves_the_board_untouched(
        #[by_ref] b: Board,
        #[filter(#b.validate(#m).is_err())] m: Move,
    ) {
        let mut next = b;
        assert_eq!(next.play(m).err(), b.validate(m).err());
        assert_eq!(next, b);
    }

    #[proptest]
    fn capturing_removes_exactly_one_opposing_piece(
        mut b: Board,
        #[filter(#s.is_playable())] s: Square,
        p: Piece,
        r: Role,
        #[strategy(select(JUMPS.to_vec()))] jump: (i8, i8),
    ) {
        let (dr, dc) = jump;
        let to = s.offset(dr, dc);
        prop_assume!(to.is_some() && p.is_valid_direction(dr));

        let m = Move::new(s, to.unwrap());
        let mid = m.midpoint().unwrap();
        b.set(s, Some(p));
        b.set(mid, Some(Piece::new(!p.color, r)));
        b.set(m.whither(), None);

        let mut next = b;
        let change = next.play(m)?;

        assert_eq!(change.captured, Some((mid, Piece::new(!p.color, r))));
        assert_eq!(next.count(!p.color), b.count(!p.color) - 1);
        assert_eq!(next.count(p.color), b.count(p.color));
        assert_eq!(next[mid], None);
    }

    #[proptest]
    fn reverting_a_played_move_restores_the_board(b: Board, selector: Selector) {
        let moves = valid_moves(&b);
        prop_assume!(!moves.is_empty());

        let (m, _) = selector.select(moves);
        let mut next = b;
        let change = next.play(m)?;
        next.revert(m, &change);
        assert_eq!(next, b);
    }

    #[proptest]
    fn replaying_a_reverted_move_restores_the_board(b: Board, selector: Selector) {
        let moves = valid_moves(&b);
        prop_assume!(!moves.is_empty());

        let (m, _) = selector.select(moves);
        let mut played = b;
        let change = played.play(m)?;

        let mut next = played;
        next.revert(m, &change);
        next.replay(m, &change);
        assert_eq!(next, played);
    }

    #[proptest]
    fn moves_from_only_yields_valid_moves(b: Board, s: Square) {
        for (m, kind) in b.moves_from(s) {
            assert_eq!(m.whence(), s);
            assert_eq!(b.validate(m), Ok(kind));
        }
    }

    #[proptest]
    fn can_capture_from_agrees_with_moves_from(b: Board, s: Square) {
        assert_eq!(
            b.can_capture_from(s),
            b.moves_from(s)
                .any(|(_, k)| matches!(k, MoveKind::Capture(_)))
        );
    }

    #[test]
    fn dark_man_captures_by_jumping_over_light_man() {
        let mut b = board(&[
            ((2, 1), Piece::man(Color::Dark)),
            ((3, 2), Piece::man(Color::Light)),
        ]);

        let change = b.play(mv((2, 1), (4, 3))).unwrap();

        assert_eq!(
            change.captured,
            Some((sq(3, 2), Piece::man(Color::Light)))
        );
        assert_eq!(b[sq(2, 1)], None);
        assert_eq!(b[sq(3, 2)], None);
        assert_eq!(b[sq(4, 3)], Some(Piece::man(Color::Dark)));
    }

    #[test]
    fn jumping_over_a_friendly_piece_is_illegal() {
        let b = board(&[
            ((2, 1), Piece::man(Color::Dark)),
            ((3, 2), Piece::man(Color::Dark)),
        ]);

        assert_eq!(
            b.validate(mv((2, 1), (4, 3))),
            Err(IllegalMove::NoEnemyAtMidpoint(sq(3, 2)))
        );
    }

    #[test]
    fn jumping_over_an_empty_square_is_illegal() {
        let b = board(&[((2, 1), Piece::man(Color::Dark))]);

        assert_eq!(
            b.validate(mv((2, 1), (4, 3))),
            Err(IllegalMove::NoEnemyAtMidpoint(sq(3, 2)))
        );
    }

    #[test]
    fn orthogonal_and_long_moves_are_illegal() {
        let b = board(&[((2, 1), Piece::king(Color::Dark))]);

        for to in [(3, 1), (2, 3), (5, 4), (4, 1), (6, 5)] {
            let m = mv((2, 1), to);
            assert_eq!(b.validate(m), Err(IllegalMove::IllegalGeometry(m)));
        }
    }

    #[test]
    fn men_may_not_capture_backward() {
        let b = board(&[
            ((4, 3), Piece::man(Color::Dark)),
            ((3, 2), Piece::man(Color::Light)),
        ]);

        let m = mv((4, 3), (2, 1));
        assert_eq!(b.validate(m), Err(IllegalMove::IllegalDirection(m)));
    }

    #[test]
    fn kings_may_capture_backward() {
        let b = board(&[
            ((4, 3), Piece::king(Color::Dark)),
            ((3, 2), Piece::man(Color::Light)),
        ]);

        assert_eq!(
            b.validate(mv((4, 3), (2, 1))),
            Ok(MoveKind::Capture(sq(3, 2)))
        );
    }

    #[proptest]
    fn men_reaching_the_far_row_are_crowned(c: Color, #[strategy(0i8..4)] i: i8) {
        let row = c.crowning_row() - c.forward();
        let col = 2 * i + (row + 1) % 2;
        let to_col = if col > 0 { col - 1 } else { col + 1 };

        let mut b = board(&[((row, col), Piece::man(c))]);
        let change = b.play(mv((row, col), (c.crowning_row(), to_col)))?;

        assert!(change.promoted);
        assert_eq!(b[sq(c.crowning_row(), to_col)], Some(Piece::king(c)));
    }

    #[test]
    fn kings_are_not_promoted_again() {
        let mut b = board(&[((1, 2), Piece::king(Color::Light))]);
        let change = b.play(mv((1, 2), (0, 1))).unwrap();

        assert!(!change.promoted);
        assert_eq!(b[sq(0, 1)].map(|p| p.role), Some(Role::King));
    }
}
