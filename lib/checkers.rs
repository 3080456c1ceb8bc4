mod board;
mod color;
mod config;
mod event;
mod game;
mod history;
mod r#move;
mod outcome;
mod piece;
mod rules;
mod square;

pub use board::*;
pub use color::*;
pub use config::*;
pub use event::*;
pub use game::*;
pub use history::*;
pub use outcome::*;
pub use piece::*;
pub use r#move::*;
pub use rules::*;
pub use square::*;
