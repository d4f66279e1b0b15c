use alloc::string::String;
use rand::Rng;

use crate::ai::Targeting;
use crate::common::{GridError, Outcome};
use crate::player::Player;

/// Computer player backed by the hunt/target strategy.
pub struct AiPlayer<R> {
    targeting: Targeting<R>,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(grid_size: usize, rng: R) -> Result<Self, GridError> {
        Ok(Self {
            targeting: Targeting::new(grid_size, rng)?,
        })
    }

    pub fn targeting(&self) -> &Targeting<R> {
        &self.targeting
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn next_command(&mut self) -> Option<String> {
        self.targeting.next_guess()
    }

    fn handle_outcome(&mut self, command: &str, outcome: Outcome) {
        self.targeting.register_outcome(command, outcome);
    }
}
