//! Common types: guess outcomes, errors and the random-pick helpers shared by
//! placement and targeting.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::config::MAX_GRID_SIZE;

/// Result of firing a command at a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Outcome {
    /// The command is malformed or addresses a cell outside the grid.
    InvalidCommand,
    /// The cell was already guessed.
    AlreadyPlayed,
    /// No vessel occupies the cell.
    MissedHit,
    /// A vessel was hit but still has intact parts.
    ShipTouched,
    /// A vessel lost its last intact part; other vessels remain.
    ShipDestroyed,
    /// The last remaining vessel was destroyed.
    ShipAllDestroyed,
}

impl Outcome {
    /// Outcomes that reject the command without consuming a guess.
    pub fn is_rejected(self) -> bool {
        matches!(self, Outcome::InvalidCommand | Outcome::AlreadyPlayed)
    }

    /// Outcomes where a vessel part was struck.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            Outcome::ShipTouched | Outcome::ShipDestroyed | Outcome::ShipAllDestroyed
        )
    }

    /// Outcomes where a vessel went down.
    pub fn is_destroyed(self) -> bool {
        matches!(self, Outcome::ShipDestroyed | Outcome::ShipAllDestroyed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::InvalidCommand => "INVALID_COMMAND",
            Outcome::AlreadyPlayed => "ALREADY_PLAYED",
            Outcome::MissedHit => "MISSED_HIT",
            Outcome::ShipTouched => "SHIP_TOUCHED",
            Outcome::ShipDestroyed => "SHIP_DESTROYED",
            Outcome::ShipAllDestroyed => "SHIP_ALL_DESTROYED",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while building or laying out a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid size is zero or wider than the alphabet.
    InvalidGridSize(usize),
    /// The named vessel cannot fit on a grid of this size.
    VesselTooLarge { name: &'static str, size: usize },
    /// Random placement gave up after the attempt cap.
    UnableToPlaceVessel(&'static str),
    /// Manual placement runs off the grid.
    VesselOutOfBounds(&'static str),
    /// Manual placement overlaps a vessel placed earlier.
    VesselOverlaps(&'static str),
    /// A vessel was placed twice.
    VesselAlreadyPlaced(&'static str),
    /// Manual layout does not have one placement per fleet member.
    LayoutMismatch { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidGridSize(n) => write!(f, "Grid size {} is not supported", n),
            GridError::VesselTooLarge { name, size } => {
                write!(f, "The {} does not fit on a {}x{} grid", name, size, size)
            }
            GridError::UnableToPlaceVessel(name) => write!(f, "Unable to place the {}", name),
            GridError::VesselOutOfBounds(name) => {
                write!(f, "The {} placement is out of bounds", name)
            }
            GridError::VesselOverlaps(name) => {
                write!(f, "The {} placement overlaps with another vessel", name)
            }
            GridError::VesselAlreadyPlaced(name) => write!(f, "The {} is already placed", name),
            GridError::LayoutMismatch { expected, found } => write!(
                f,
                "Layout has {} placements but the fleet has {} vessels",
                found, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// Check that a `size`×`size` grid can be addressed by command tokens:
/// at least one cell and no more columns than letters.
pub fn validate_grid_size(size: usize) -> Result<(), GridError> {
    if size == 0 || size > MAX_GRID_SIZE {
        return Err(GridError::InvalidGridSize(size));
    }
    Ok(())
}

/// Errors raised by a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A shot was fired after the game ended.
    GameOver,
    Grid(GridError),
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        GameError::Grid(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::Grid(e) => write!(f, "Grid error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Pick one candidate uniformly at random. `None` if there are none.
pub fn pick_uniform_random<'a, T, R: Rng + ?Sized>(
    candidates: &'a [T],
    rng: &mut R,
) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.random_range(0..candidates.len()))
}

/// Remove and return one candidate uniformly at random (sampling without
/// replacement). `None` once the list is exhausted.
pub fn take_uniform_random<T, R: Rng + ?Sized>(
    candidates: &mut Vec<T>,
    rng: &mut R,
) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..candidates.len());
    Some(candidates.swap_remove(idx))
}
