//! Core connect-N game logic: board representation, player and variant types,
//! the per-game state, and the engine that drives games and the bot.

mod board;
mod engine;
mod player;
mod state;
mod variant;

pub use board::{Board, Cell};
pub use engine::GameEngine;
pub use player::Player;
pub use state::{GameMode, GameOutcome, GameState, Move};
pub use variant::Variant;
