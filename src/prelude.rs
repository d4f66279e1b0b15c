//! Commonly used types for ease of import.

pub use crate::{
    AiPlayer, Coordinate, Game, GameStatus, Grid, Orientation, Outcome, Player, Side, Targeting,
};

#[cfg(feature = "std")]
pub use crate::CliPlayer;
