use alloc::string::String;

use crate::common::Outcome;

/// Interface implemented by the participants of a game.
pub trait Player {
    /// Next command to fire, or `None` to leave the game.
    fn next_command(&mut self) -> Option<String>;

    /// Inform the player of the outcome of its last command.
    fn handle_outcome(&mut self, _command: &str, _outcome: Outcome) {}
}
