//! Move selection for the computer opponent.

mod agent;
mod random;

pub use agent::Agent;
pub use random::RandomAgent;
