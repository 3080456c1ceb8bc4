use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::checkers::{Game, GameConfig, Move, Notify, Trace};
use tracing::{info, instrument};

/// Replay a sequence of moves and print the final position.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// The initial setup, in RON, e.g. `(starts: dark)`.
    #[clap(short, long, default_value_t)]
    config: GameConfig,

    /// The moves to play in order, e.g. `52-41 21-32`.
    moves: Vec<Move>,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::with_config(self.config, Trace);
        replay(&mut game, &self.moves)?;

        println!("{:#}", game.board());
        match game.outcome() {
            Some(o) => println!("game over, {}", o),
            None => println!("{} to move", game.turn()),
        }

        Ok(())
    }
}

fn replay<N: Notify>(game: &mut Game<N>, moves: &[Move]) -> Result<(), Anyhow> {
    for (i, &m) in moves.iter().enumerate() {
        game.execute(m)
            .with_context(|| format!("failed to play move #{} `{}`", i + 1, m))?;
    }

    info!(moves = moves.len(), board = %game.board());

    Ok(())
}
