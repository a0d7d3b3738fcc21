use crate::game::GameState;

/// Chooses a column for the player whose turn it is.
///
/// The engine consults its agent once per bot reply. Implementations should
/// return one of `state.legal_columns()`; `None` means there is nothing left
/// to play.
pub trait Agent {
    /// Select a 0-based column given the current game state.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
