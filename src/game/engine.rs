use tracing::{debug, info, warn};

use super::state::{GameMode, GameOutcome, GameState, Move};
use super::{Player, Variant};
use crate::ai::{Agent, RandomAgent};
use crate::error::MoveError;

/// Owns the single active game and the bot that answers in bot mode.
///
/// Every operation is one synchronous transaction. Callers that share an
/// engine between threads must serialize access themselves (the HTTP layer
/// keeps it behind a mutex).
pub struct GameEngine {
    state: GameState,
    bot: Box<dyn Agent + Send>,
    last_bot_move: Option<usize>,
}

impl GameEngine {
    /// Engine with a random bot seeded from OS entropy
    pub fn new() -> Self {
        Self::with_bot(Box::new(RandomAgent::new()))
    }

    /// Engine whose random bot replays the same choices for the same seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_bot(Box::new(RandomAgent::with_seed(seed)))
    }

    /// Engine with a caller-supplied bot
    pub fn with_bot(bot: Box<dyn Agent + Send>) -> Self {
        GameEngine {
            state: GameState::initial(),
            bot,
            last_bot_move: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Name of the agent playing as player 2 in bot mode
    pub fn bot_name(&self) -> &str {
        self.bot.name()
    }

    /// Column (0-based) the bot chose on its most recent reply in this game
    pub fn last_bot_move(&self) -> Option<usize> {
        self.last_bot_move
    }

    /// Start a two-player game, discarding whatever was in progress
    pub fn start(&mut self, variant: Variant) -> &GameState {
        self.begin(variant, GameMode::Duo)
    }

    /// Start a game against the bot, which always plays as player 2
    pub fn start_bot(&mut self, variant: Variant) -> &GameState {
        self.begin(variant, GameMode::Bot)
    }

    fn begin(&mut self, variant: Variant, mode: GameMode) -> &GameState {
        info!(?variant, ?mode, "starting game");
        self.state = GameState::fresh(variant, mode, true);
        self.last_bot_move = None;
        &self.state
    }

    /// Clear the board, keeping the variant, mode and started flag
    pub fn reset(&mut self) -> &GameState {
        let (variant, mode, started) = (
            self.state.variant(),
            self.state.mode(),
            self.state.is_started(),
        );
        info!(?variant, ?mode, started, "resetting board");
        self.state = GameState::fresh(variant, mode, started);
        self.last_bot_move = None;
        &self.state
    }

    /// Return to the unstarted standard-board rest state
    pub fn quit(&mut self) -> &GameState {
        info!("quitting game");
        self.state = GameState::initial();
        self.last_bot_move = None;
        &self.state
    }

    /// Drop a token into the 1-based column given as text.
    pub fn drop_token(&mut self, column: &str) -> Result<&GameState, MoveError> {
        if !self.state.is_started() {
            return Err(MoveError::NotStarted);
        }
        let trimmed = column.trim();
        let column: i64 = trimmed
            .parse()
            .map_err(|_| MoveError::not_a_number(trimmed))?;
        self.play_column(column)
    }

    /// Drop the current player's token into a 1-based column. In bot mode the
    /// bot's reply is made before returning, so the caller never sees the
    /// bot's turn pending.
    pub fn play_column(&mut self, column: i64) -> Result<&GameState, MoveError> {
        if !self.state.is_started() {
            return Err(MoveError::NotStarted);
        }
        let cols = self.state.variant().cols();
        if column < 1 || column > cols as i64 {
            return Err(MoveError::OutOfRange { column, cols });
        }
        if self.state.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let placed = self.state.apply_move_mut((column - 1) as usize)?;
        self.log_move(placed);

        if self.state.mode() == GameMode::Bot
            && !self.state.is_game_over()
            && self.state.current_player() == Player::Two
        {
            self.bot_reply();
        }

        Ok(&self.state)
    }

    /// One bot move through the same drop, win and draw sequence as a human move.
    fn bot_reply(&mut self) {
        let legal = self.state.legal_columns();
        let column = match self.bot.select_action(&self.state) {
            Some(column) if legal.contains(&column) => Some(column),
            choice => {
                warn!(
                    ?choice,
                    bot = self.bot.name(),
                    "bot gave no legal column, playing leftmost"
                );
                legal.first().copied()
            }
        };

        // Only reachable with a full board, which the draw check has already settled
        let Some(column) = column else {
            self.state.declare_draw();
            self.log_outcome();
            return;
        };

        match self.state.apply_move_mut(column) {
            Ok(placed) => {
                self.last_bot_move = Some(column);
                self.log_move(placed);
            }
            Err(err) => warn!(%err, column, "bot move rejected"),
        }
    }

    fn log_move(&self, placed: Move) {
        debug!(
            player = placed.player.number(),
            row = placed.row,
            col = placed.col,
            "token placed"
        );
        self.log_outcome();
    }

    fn log_outcome(&self) {
        match self.state.outcome() {
            Some(GameOutcome::Winner(player)) => info!(winner = player.number(), "game won"),
            Some(GameOutcome::Draw) => info!("game drawn"),
            None => {}
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
