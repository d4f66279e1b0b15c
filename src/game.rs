use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::{
    common::{GameError, GridError, Outcome},
    grid::Grid,
    player::Player,
};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The human.
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Computer => "computer",
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }
}

/// Current status of a game, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A command fired by a side and what it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub side: Side,
    pub command: String,
    pub outcome: Outcome,
}

/// Turn-based session between the human and the computer.
///
/// Each side owns a grid carrying its fleet and fires at the other side's
/// grid. A miss passes the turn; hits and rejected commands keep it.
pub struct Game {
    fleets: [Grid; 2],
    turn: Side,
    status: GameStatus,
    shots: Vec<Shot>,
}

impl Game {
    /// Start a game with both fleets placed at random. The human moves first.
    pub fn new<R: Rng + ?Sized>(grid_size: usize, rng: &mut R) -> Result<Self, GridError> {
        let player = Grid::new(grid_size, rng)?;
        let computer = Grid::new(grid_size, rng)?;
        Ok(Self::from_grids(player, computer))
    }

    /// Start a game from prepared fleets.
    pub fn from_grids(player: Grid, computer: Grid) -> Self {
        Self {
            fleets: [player, computer],
            turn: Side::Player,
            status: GameStatus::InProgress,
            shots: Vec::new(),
        }
    }

    /// Fire `command` for the side whose turn it is.
    pub fn fire(&mut self, command: &str) -> Result<Outcome, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let side = self.turn;
        let outcome = self.fleets[side.opponent().index()].hit(command);
        debug!("{} fired {} -> {}", side.name(), command, outcome);

        if outcome.is_rejected() {
            return Ok(outcome);
        }
        self.shots.push(Shot {
            side,
            command: command.to_ascii_lowercase(),
            outcome,
        });

        match outcome {
            Outcome::MissedHit => self.turn = side.opponent(),
            Outcome::ShipAllDestroyed => {
                self.status = match side {
                    Side::Player => GameStatus::Won,
                    Side::Computer => GameStatus::Lost,
                };
                info!("{} destroyed every vessel after {} shots", side.name(), self.shots.len());
            }
            _ => {}
        }
        Ok(outcome)
    }

    /// Let `player` act for the current side: fetch a command, fire it and
    /// report the outcome back. `None` when the player leaves.
    pub fn play_turn(&mut self, player: &mut dyn Player) -> Result<Option<Shot>, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let side = self.turn;
        let Some(command) = player.next_command() else {
            info!("{} left the game", side.name());
            return Ok(None);
        };
        let outcome = self.fire(&command)?;
        player.handle_outcome(&command, outcome);
        Ok(Some(Shot {
            side,
            command,
            outcome,
        }))
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(Side::Player),
            GameStatus::Lost => Some(Side::Computer),
        }
    }

    /// Grid carrying `side`'s own fleet.
    pub fn fleet(&self, side: Side) -> &Grid {
        &self.fleets[side.index()]
    }

    /// Vessels `side` still has afloat.
    pub fn remaining(&self, side: Side) -> usize {
        self.fleet(side).remaining_vessel_count()
    }

    /// Accepted shots of both sides, in order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Accepted shots fired by `side`.
    pub fn shot_count(&self, side: Side) -> usize {
        self.shots.iter().filter(|s| s.side == side).count()
    }
}
