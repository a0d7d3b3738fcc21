use std::path::PathBuf;

/// Reasons a drop request is rejected. Every variant is recoverable: the game
/// state is left untouched and the display text is shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no game in progress, start a new game first")]
    NotStarted,

    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("column {column} does not exist (choose 1 to {cols})")]
    OutOfRange { column: i64, cols: usize },

    #[error("the game is over, reset or start a new game")]
    GameOver,

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Longest slice of rejected input echoed back in a message
const ECHO_LIMIT: usize = 16;

impl MoveError {
    /// Reject unparsable column text, echoing at most `ECHO_LIMIT` characters
    /// of it.
    pub fn not_a_number(input: &str) -> Self {
        let mut chars = input.chars();
        let mut echoed: String = chars.by_ref().take(ECHO_LIMIT).collect();
        if chars.next().is_some() {
            echoed.push('…');
        }
        MoveError::NotANumber(echoed)
    }

    /// Rejections the adapter should swallow without showing a message.
    pub fn is_silent(&self) -> bool {
        matches!(self, MoveError::NotStarted)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
