use crate::io::Io;
use anyhow::Error as Anyhow;
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::checkers::{Game, GameConfig, Move, MoveOutcome, Notify, ParseMoveError, Trace};
use std::io::{stdin, stdout, ErrorKind, Read, Write};
use std::str::FromStr;
use tracing::{instrument, warn};

const USAGE: &str = "try `21-32`, `2 1 3 2`, `undo`, `redo`, `restart`, `moves` or `quit`";

/// Play a game of checkers, reading commands from the standard input.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The initial setup, in RON, e.g. `(starts: dark)`.
    #[clap(short, long, default_value_t)]
    config: GameConfig,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    Execute(Move),
    Attempt(i8, i8, i8, i8),
    Undo,
    Redo,
    Restart,
    Moves,
    Quit,
}

#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
enum ParseCommandError {
    #[display(fmt = "unknown command")]
    #[from(ignore)]
    Unknown,
    #[display(fmt = "{}", _0)]
    InvalidMove(ParseMoveError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();

        match tokens[..] {
            ["undo"] => Ok(Command::Undo),
            ["redo"] => Ok(Command::Redo),
            ["restart"] => Ok(Command::Restart),
            ["moves"] => Ok(Command::Moves),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            [fr, fc, tr, tc] => match (fr.parse::<i8>(), fc.parse(), tr.parse(), tc.parse()) {
                (Ok(fr), Ok(fc), Ok(tr), Ok(tc)) => Ok(Command::Attempt(fr, fc, tr, tc)),
                _ => Err(ParseCommandError::Unknown),
            },
            _ if s.contains('-') => Ok(Command::Execute(s.parse()?)),
            _ => Err(ParseCommandError::Unknown),
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::with_config(self.config, Trace);
        let mut io = Io::new(stdout(), stdin());
        session(&mut game, &mut io)
    }
}

fn session<N: Notify, W: Write, R: Read>(
    game: &mut Game<N>,
    io: &mut Io<W, R>,
) -> Result<(), Anyhow> {
    loop {
        io.send(format_args!("{:#}", game.board()))?;

        match (game.outcome(), game.continuation()) {
            (Some(o), _) => io.send(format_args!("game over, {}", o))?,
            (None, Some(sq)) => {
                io.send(format_args!("{} must capture again from {}", game.turn(), sq))?
            }
            (None, None) => io.send(format_args!("{} to move", game.turn()))?,
        }

        io.prompt("> ")?;

        let line = match io.recv() {
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break Ok(()),
            r => r?,
        };

        if line.trim().is_empty() {
            continue;
        }

        let cmd = match line.parse() {
            Ok(cmd) => cmd,
            Err(e) => {
                warn!(%e, %line, "ignoring command");
                io.send(format_args!("{}, {}", e, USAGE))?;
                continue;
            }
        };

        match cmd {
            Command::Execute(m) => {
                if let Err(e) = game.execute(m) {
                    io.send(format_args!("illegal move, {}", e))?;
                }
            }

            Command::Attempt(fr, fc, tr, tc) => {
                if game.attempt(fr, fc, tr, tc) == MoveOutcome::Rejected {
                    io.send("illegal move")?;
                }
            }

            Command::Undo => {
                if !game.undo() {
                    io.send("nothing to undo")?;
                }
            }

            Command::Redo => {
                if !game.redo() {
                    io.send("nothing to redo")?;
                }
            }

            Command::Restart => game.restart(),

            Command::Moves => {
                let moves: Vec<_> = game.moves().map(|m| m.to_string()).collect();
                io.send(moves.join(" "))?;
            }

            Command::Quit => break Ok(()),
        }
    }
}
