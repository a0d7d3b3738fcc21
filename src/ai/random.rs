use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::agent::Agent;
use crate::game::GameState;

/// An agent that selects uniformly at random from legal columns.
///
/// The generator is seeded once, when the agent is built, and then reused for
/// every move.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Seed from OS entropy
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        state.legal_columns().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
