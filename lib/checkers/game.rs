use crate::checkers::{Board, Color, Event, GameConfig, History, IllegalMove, Move, MoveKind};
use crate::checkers::{Mute, Notify, Outcome, Record, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The result of [`Game::attempt`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveOutcome {
    /// The move was played; if `continuation` is set the same piece must capture again.
    Applied { continuation: bool },
    /// The move was illegal and nothing changed.
    Rejected,
}

/// A snapshot of the game, detached from its history.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct State {
    pub board: Board,
    pub turn: Color,
    pub continuation: Option<Square>,
}

/// A game of checkers between two sides sharing the board.
#[derive(Debug, Clone)]
pub struct Game<N = Mute> {
    config: GameConfig,
    board: Board,
    turn: Color,
    continuation: Option<Square>,
    history: History,
    notifier: N,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A new game from the standard layout that announces nothing.
    pub fn new() -> Self {
        Game::with_config(GameConfig::default(), Mute)
    }
}

impl<N: Notify> Game<N> {
    /// A new game set up according to `config`, announcing [`Event`]s to `notifier`.
    pub fn with_config(config: GameConfig, notifier: N) -> Self {
        Game {
            board: config.board,
            turn: config.starts,
            continuation: None,
            history: History::default(),
            notifier,
            config,
        }
    }

    /// Sets the pieces up again and forgets the history.
    #[instrument(level = "debug", skip(self))]
    pub fn restart(&mut self) {
        self.board = self.config.board;
        self.turn = self.config.starts;
        self.continuation = None;
        self.history.clear();
    }

    /// The current piece placement.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A copy of the current piece placement.
    pub fn snapshot(&self) -> Board {
        self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The square of the piece that must capture again, if any.
    pub fn continuation(&self) -> Option<Square> {
        self.continuation
    }

    /// The moves played so far and those undone.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The configuration this game was set up with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The [`Notify`] implementation events are announced to.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// A serializable snapshot of the board and turn.
    pub fn state(&self) -> State {
        State {
            board: self.board,
            turn: self.turn,
            continuation: self.continuation,
        }
    }

    /// The result of the game, if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::detect(&self.board)
    }

    /// Whether the piece on the given [`Square`] may be moved now.
    pub fn can_select(&self, sq: Square) -> bool {
        match (self.board[sq], self.continuation) {
            (Some(p), None) => p.color == self.turn,
            (Some(_), Some(c)) => c == sq,
            (None, _) => false,
        }
    }

    /// Like [`Game::can_select`], but announces [`Event::Invalid`] if the piece may not move.
    pub fn select(&mut self, sq: Square) -> bool {
        let selectable = self.can_select(sq);

        if !selectable {
            debug!(%sq, "rejected selection");
            self.notifier.notify(Event::Invalid);
        }

        selectable
    }

    /// The moves [`Game::execute`] would accept from the given [`Square`].
    pub fn moves_from(&self, sq: Square) -> impl Iterator<Item = Move> + '_ {
        let selectable = self.can_select(sq);
        let must_capture = self.continuation.is_some();

        self.board
            .moves_from(sq)
            .filter(move |&(_, k)| selectable && !(must_capture && k == MoveKind::Step))
            .map(|(m, _)| m)
    }

    /// The moves [`Game::execute`] would accept.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        Square::iter().flat_map(move |sq| self.moves_from(sq))
    }

    fn check(&self, m: Move) -> Result<(), IllegalMove> {
        use IllegalMove::*;

        let piece = self.board[m.whence()].ok_or(NoPieceAtSource(m.whence()))?;

        if piece.color != self.turn {
            return Err(WrongSideToMove(self.turn));
        }

        match self.continuation {
            Some(sq) if sq != m.whence() => Err(ContinuationPending(sq)),
            Some(sq) if self.board.validate(m)? == MoveKind::Step => Err(ContinuationPending(sq)),
            _ => Ok(()),
        }
    }

    fn reject(&mut self, e: IllegalMove) -> IllegalMove {
        debug!(%e, "rejected move");
        self.notifier.notify(Event::Invalid);
        e
    }

    /// Plays a [`Move`] if legal, otherwise returns the reason why not.
    ///
    /// A capture that leaves the same piece able to capture again keeps the turn.
    #[instrument(level = "debug", skip(self, m), fields(%m))]
    pub fn execute(&mut self, m: Move) -> Result<Record, IllegalMove> {
        let change = match self.check(m).and_then(|_| self.board.play(m)) {
            Err(e) => return Err(self.reject(e)),
            Ok(change) => change,
        };

        let pending = match change.captured {
            Some(_) if self.board.can_capture_from(m.whither()) => Some(m.whither()),
            _ => None,
        };

        let record = Record {
            played: m,
            change,
            resumed: self.continuation,
            pending,
        };

        self.history.push(record);
        self.continuation = pending;
        if pending.is_none() {
            self.turn = !self.turn;
        }

        match change.captured {
            None => self.notifier.notify(Event::Move),
            Some(_) => self.notifier.notify(Event::Capture),
        }

        if change.promoted {
            self.notifier.notify(Event::King);
        }

        if let Some(outcome) = self.outcome() {
            debug!(%outcome);
            self.notifier.notify(Event::GameOver);
        }

        Ok(record)
    }

    /// Plays the move between two pairs of coordinates if legal.
    pub fn attempt(&mut self, from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> MoveOutcome {
        let m = match (Square::new(from_row, from_col), Square::new(to_row, to_col)) {
            (Ok(whence), Ok(whither)) => Move::new(whence, whither),
            (Err(e), _) | (_, Err(e)) => {
                self.reject(e.into());
                return MoveOutcome::Rejected;
            }
        };

        match self.execute(m) {
            Ok(r) => MoveOutcome::Applied {
                continuation: r.pending.is_some(),
            },
            Err(_) => MoveOutcome::Rejected,
        }
    }

    /// Takes back the latest move, returning `false` if there is none.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn undo(&mut self) -> bool {
        let Some(r) = self.history.undo() else {
            return false;
        };

        self.board.revert(r.played, &r.change);
        self.turn = r.change.piece.color;
        self.continuation = r.resumed;
        self.notifier.notify(Event::Undo);

        true
    }

    /// Plays again the latest move undone, returning `false` if there is none.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn redo(&mut self) -> bool {
        let Some(r) = self.history.redo() else {
            return false;
        };

        self.board.replay(r.played, &r.change);
        self.continuation = r.pending;
        self.turn = match r.pending {
            Some(_) => r.change.piece.color,
            None => !r.change.piece.color,
        };

        self.notifier.notify(Event::Redo);

        true
    }
}
