use serde::Serialize;

use crate::game::{GameEngine, GameMode, GameOutcome, GameState, Player, Variant};

/// The engine plus the message shown on the next rendered page.
pub struct GameSession {
    engine: GameEngine,
    message: Option<String>,
}

/// JSON view of a session.
#[derive(Serialize)]
pub struct Snapshot<'a> {
    #[serde(flatten)]
    pub state: &'a GameState,
    pub message: Option<&'a str>,
    pub bot_column: Option<usize>,
}

impl GameSession {
    pub fn new(engine: GameEngine) -> Self {
        GameSession {
            engine,
            message: None,
        }
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: self.engine.state(),
            message: self.message(),
            bot_column: self.engine.last_bot_move(),
        }
    }

    pub fn start(&mut self, variant: Variant) {
        self.engine.start(variant);
        self.message = Some(format!(
            "New game: {} in a row on a {}×{} board. Player 1 to play.",
            variant.connect_n(),
            variant.rows(),
            variant.cols()
        ));
    }

    pub fn start_bot(&mut self, variant: Variant) {
        self.engine.start_bot(variant);
        self.message = Some(format!(
            "New game against the bot: {} in a row on a {}×{} board. You play first.",
            variant.connect_n(),
            variant.rows(),
            variant.cols()
        ));
    }

    /// Drop a token into the column named by the form field
    pub fn play(&mut self, column: &str) {
        match self.engine.drop_token(column) {
            Ok(state) => {
                self.message = outcome_message(state);
            }
            Err(err) if err.is_silent() => {}
            Err(err) => {
                self.message = Some(capitalize(&err.to_string()));
            }
        }
    }

    pub fn reset(&mut self) {
        let started = self.engine.reset().is_started();
        self.message = started.then(|| "Board cleared. Player 1 to play.".to_string());
    }

    pub fn quit(&mut self) {
        self.engine.quit();
        self.message = None;
    }
}

fn outcome_message(state: &GameState) -> Option<String> {
    match state.outcome()? {
        GameOutcome::Winner(Player::Two) if state.mode() == GameMode::Bot => {
            Some("The bot wins!".to_string())
        }
        GameOutcome::Winner(player) => Some(format!("{} wins!", player.name())),
        GameOutcome::Draw => Some("It's a draw!".to_string()),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_move_sets_message() {
        let mut session = GameSession::new(GameEngine::new());
        session.start(Variant::Standard);
        session.play("8");
        assert_eq!(session.message(), Some("Column 8 does not exist (choose 1 to 7)"));
        session.play("x");
        assert_eq!(session.message(), Some("'x' is not a column number"));
    }

    #[test]
    fn test_move_before_start_keeps_message() {
        let mut session = GameSession::new(GameEngine::new());
        session.play("1");
        assert_eq!(session.message(), None);
        assert!(!session.state().is_started());
    }

    #[test]
    fn test_win_message() {
        let mut session = GameSession::new(GameEngine::new());
        session.start(Variant::Standard);
        for col in ["1", "1", "2", "2", "3", "3"] {
            session.play(col);
            assert_eq!(session.message(), None);
        }
        session.play("4");
        assert_eq!(session.message(), Some("Player 1 wins!"));
    }

    #[test]
    fn test_lifecycle_messages() {
        let mut session = GameSession::new(GameEngine::new());
        session.reset();
        assert_eq!(session.message(), None);

        session.start_bot(Variant::Large);
        assert!(session.message().unwrap().contains("5 in a row on a 7×9 board"));
        session.reset();
        assert_eq!(session.message(), Some("Board cleared. Player 1 to play."));
        session.quit();
        assert_eq!(session.message(), None);
    }

    #[test]
    fn test_snapshot_includes_message() {
        let mut session = GameSession::new(GameEngine::with_seed(3));
        session.start_bot(Variant::Standard);
        session.play("4");
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["mode"], "bot");
        assert_eq!(json["current_player"], 1);
        assert!(json["bot_column"].is_u64());
        assert!(json["message"].is_null());
    }
}
