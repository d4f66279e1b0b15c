//! Computer opponent: hunt (random search) until a vessel is touched, then
//! target the orthogonal neighbors of the touch point until it goes down.

use alloc::string::String;
use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{take_uniform_random, validate_grid_size, GridError, Outcome};
use crate::coord::{self, Coordinate};

/// Current search state of a [`Targeting`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// No live touch point; guesses are uniform over unguessed cells.
    Hunt,
    /// Pursuing the vessel touched at this coordinate.
    Target(Coordinate),
}

/// Hunt/target state machine driving the computer's guesses.
///
/// Sees only the commands it played and their outcomes, never the grid it
/// fires at.
pub struct Targeting<R> {
    grid_size: usize,
    history: Vec<String>,
    guessed: BitBoard,
    last_touched: Option<Coordinate>,
    rng: R,
}

impl<R: Rng> Targeting<R> {
    /// Fails with `InvalidGridSize` for sizes a [`Grid`](crate::Grid) would
    /// also refuse, since its guesses could not be written as tokens.
    pub fn new(grid_size: usize, rng: R) -> Result<Self, GridError> {
        validate_grid_size(grid_size)?;
        Ok(Self {
            grid_size,
            history: Vec::new(),
            guessed: BitBoard::new(grid_size),
            last_touched: None,
            rng,
        })
    }

    /// Record the outcome of a command this opponent played.
    pub fn register_outcome(&mut self, token: &str, outcome: Outcome) {
        let token = token.to_ascii_lowercase();
        let decoded = coord::decode(&token, self.grid_size);
        if let Some(c) = decoded {
            let _ = self.guessed.set(c);
        }
        self.history.push(token);

        match outcome {
            Outcome::ShipTouched => {
                if let Some(c) = decoded {
                    debug!("touched a vessel at {}, targeting", c);
                    self.last_touched = Some(c);
                }
            }
            Outcome::ShipDestroyed | Outcome::ShipAllDestroyed => {
                if self.last_touched.take().is_some() {
                    debug!("vessel destroyed, back to hunting");
                }
            }
            _ => {}
        }
    }

    /// Next command to play, or `None` once every cell has been guessed.
    pub fn next_guess(&mut self) -> Option<String> {
        if let Some(touched) = self.last_touched {
            let mut candidates = orthogonal_neighbors(touched, self.grid_size);
            while let Some(candidate) = take_uniform_random(&mut candidates, &mut self.rng) {
                if !self.in_history(candidate) {
                    return Some(candidate.to_token());
                }
            }
            debug!("neighbors of {} exhausted, falling back to hunt", touched);
            self.last_touched = None;
        }
        self.hunt()
    }

    /// Uniform rejection sampling over the grid. Terminates while at least
    /// one cell is unguessed, which holds for as long as a game is running.
    fn hunt(&mut self) -> Option<String> {
        if self.guessed.is_full() {
            return None;
        }
        loop {
            let candidate = Coordinate::new(
                self.rng.random_range(0..self.grid_size),
                self.rng.random_range(0..self.grid_size),
            );
            if !self.in_history(candidate) {
                return Some(candidate.to_token());
            }
        }
    }

    /// Whether `coord` has already been played by this opponent.
    pub fn in_history(&self, coord: Coordinate) -> bool {
        self.guessed.contains(coord)
    }

    pub fn mode(&self) -> TargetMode {
        match self.last_touched {
            Some(c) => TargetMode::Target(c),
            None => TargetMode::Hunt,
        }
    }

    pub fn last_touched(&self) -> Option<Coordinate> {
        self.last_touched
    }

    /// Commands played so far, lowercased, in order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }
}

/// Cells one step left, right, up and down from `coord`, clipped to the
/// grid. No diagonals.
pub fn orthogonal_neighbors(coord: Coordinate, grid_size: usize) -> Vec<Coordinate> {
    let mut out = Vec::with_capacity(4);
    if coord.column > 0 {
        out.push(Coordinate::new(coord.column - 1, coord.row));
    }
    if coord.column + 1 < grid_size {
        out.push(Coordinate::new(coord.column + 1, coord.row));
    }
    if coord.row > 0 {
        out.push(Coordinate::new(coord.column, coord.row - 1));
    }
    if coord.row + 1 < grid_size {
        out.push(Coordinate::new(coord.column, coord.row + 1));
    }
    out
}
