use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::{Board, Player, Variant};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Who is playing. `Idle` is the rest state before a game is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    #[serde(rename = "none")]
    Idle,
    Duo,
    Bot,
}

/// A single placed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

/// Everything a view needs to render the current game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    variant: Variant,
    current_player: Player,
    outcome: Option<GameOutcome>,
    started: bool,
    mode: GameMode,
    last_move: Option<Move>,
}

impl GameState {
    /// The unstarted standard-board state
    pub fn initial() -> Self {
        Self::fresh(Variant::Standard, GameMode::Idle, false)
    }

    /// Empty board for `variant` with player 1 to move
    pub(crate) fn fresh(variant: Variant, mode: GameMode, started: bool) -> Self {
        GameState {
            board: Board::new(variant),
            variant,
            current_player: Player::One,
            outcome: None,
            started,
            mode,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The winning player, if the game ended with a win
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// True after a win or a draw
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Whether a drop would currently be considered at all
    pub fn accepts_moves(&self) -> bool {
        self.started && !self.is_game_over()
    }

    /// Get list of legal 0-based columns (empty once the game is over)
    pub fn legal_columns(&self) -> Vec<usize> {
        if !self.accepts_moves() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current player's token into a 0-based column and settle the
    /// outcome: win first, then draw, otherwise hand the turn over.
    ///
    /// On error the state is unchanged.
    pub(crate) fn apply_move_mut(&mut self, column: usize) -> Result<Move, MoveError> {
        if !self.started {
            return Err(MoveError::NotStarted);
        }
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player.to_cell())?;
        let placed = Move {
            player,
            row,
            col: column,
        };
        self.last_move = Some(placed);

        if self.board.check_win(row, column, self.variant.connect_n()) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = player.other();
        }

        Ok(placed)
    }

    /// Settle a position where nobody can move. Only reachable when an agent
    /// reports no legal column, which the draw check normally rules out.
    pub(crate) fn declare_draw(&mut self) {
        if self.outcome.is_none() {
            self.outcome = Some(GameOutcome::Draw);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Flat snapshot: winner is 0 for none, otherwise the player number.
impl Serialize for GameState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("GameState", 11)?;
        s.serialize_field("board", &self.board)?;
        s.serialize_field("variant", &self.variant)?;
        s.serialize_field("rows", &self.variant.rows())?;
        s.serialize_field("cols", &self.variant.cols())?;
        s.serialize_field("connect_n", &self.variant.connect_n())?;
        s.serialize_field("current_player", &self.current_player)?;
        s.serialize_field("winner", &self.winner().map_or(0, Player::number))?;
        s.serialize_field("game_over", &self.is_game_over())?;
        s.serialize_field("started", &self.started)?;
        s.serialize_field("mode", &self.mode)?;
        s.serialize_field("last_move", &self.last_move)?;
        s.end()
    }
}
