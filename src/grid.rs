//! A player's grid: fleet placement and hit resolution.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{pick_uniform_random, validate_grid_size, GridError, Outcome};
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::{self, Coordinate, Orientation};
use crate::vessel::{footprint, Vessel, VesselClass};

/// Fleet, occupied cells and guess history of one side.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    vessels: Vec<Vessel>,
    occupied: BitBoard,
    history: Vec<String>,
    hits: BitBoard,
    misses: BitBoard,
}

impl Grid {
    /// Build a `size`×`size` grid and place the fleet at random.
    ///
    /// Each vessel draws its orientation once, then resamples the origin
    /// until the footprint is clear. The standard fleet covers 13 of 100
    /// cells so this converges quickly; the attempt cap only trips on
    /// grids where the fleet cannot be laid out.
    pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, GridError> {
        let mut grid = Self::empty(size)?;
        for class in FLEET {
            grid.place_random(class, rng)?;
        }
        debug!("placed {} vessels on a {}x{} grid", grid.vessels.len(), size, size);
        Ok(grid)
    }

    /// Build a grid with the fleet at the given positions, one entry per
    /// fleet member in fleet order.
    pub fn with_layout(
        size: usize,
        layout: &[(Coordinate, Orientation)],
    ) -> Result<Self, GridError> {
        if layout.len() != FLEET.len() {
            return Err(GridError::LayoutMismatch {
                expected: FLEET.len(),
                found: layout.len(),
            });
        }
        let mut grid = Self::empty(size)?;
        for (class, &(origin, orientation)) in FLEET.iter().zip(layout) {
            if !footprint(origin, orientation, class.size()).all(|c| c.in_bounds(size)) {
                return Err(GridError::VesselOutOfBounds(class.name()));
            }
            if grid.collides(origin, orientation, class.size()) {
                return Err(GridError::VesselOverlaps(class.name()));
            }
            grid.commit(Vessel::new(*class), origin, orientation)?;
        }
        Ok(grid)
    }

    fn empty(size: usize) -> Result<Self, GridError> {
        validate_grid_size(size)?;
        Ok(Grid {
            size,
            vessels: Vec::with_capacity(FLEET.len()),
            occupied: BitBoard::new(size),
            history: Vec::new(),
            hits: BitBoard::new(size),
            misses: BitBoard::new(size),
        })
    }

    fn place_random<R: Rng + ?Sized>(
        &mut self,
        class: VesselClass,
        rng: &mut R,
    ) -> Result<(), GridError> {
        // Origin on the varying axis stays within `size - 1 - vessel size`.
        let span = self
            .size
            .checked_sub(class.size() + 1)
            .ok_or(GridError::VesselTooLarge {
                name: class.name(),
                size: self.size,
            })?;
        let orientation = pick_uniform_random(&Orientation::ALL[..], rng)
            .copied()
            .unwrap_or(Orientation::Horizontal);

        for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
            let varying = rng.random_range(0..=span);
            let fixed = rng.random_range(0..self.size);
            let origin = match orientation {
                Orientation::Horizontal => Coordinate::new(varying, fixed),
                Orientation::Vertical => Coordinate::new(fixed, varying),
            };
            if self.collides(origin, orientation, class.size()) {
                trace!("{} at {} collides, resampling (attempt {})", class.name(), origin, attempt);
                continue;
            }
            return self.commit(Vessel::new(class), origin, orientation);
        }
        Err(GridError::UnableToPlaceVessel(class.name()))
    }

    fn collides(&self, origin: Coordinate, orientation: Orientation, size: usize) -> bool {
        self.occupied.any(footprint(origin, orientation, size))
    }

    fn commit(
        &mut self,
        mut vessel: Vessel,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), GridError> {
        let name = vessel.class().name();
        vessel.place(origin, orientation)?;
        for cell in vessel.cells() {
            self.occupied
                .set(cell)
                .map_err(|_| GridError::VesselOutOfBounds(name))?;
        }
        trace!("placed {} at {} ({:?})", name, origin, orientation);
        self.vessels.push(vessel);
        Ok(())
    }

    /// Fire the command `raw` at this grid.
    ///
    /// Malformed or out-of-range commands yield `InvalidCommand`, repeats
    /// yield `AlreadyPlayed`; neither mutates the grid.
    pub fn hit(&mut self, raw: &str) -> Outcome {
        let token = raw.to_ascii_lowercase();
        let Some(coord) = coord::decode(&token, self.size) else {
            return Outcome::InvalidCommand;
        };
        if self.is_guessed(coord) {
            return Outcome::AlreadyPlayed;
        }
        self.history.push(coord.to_token());

        // Vessels never overlap, so the first one to report a hit owns the cell.
        let Some(idx) = self.vessels.iter_mut().position(|v| v.register_hit(coord)) else {
            let _ = self.misses.set(coord);
            return Outcome::MissedHit;
        };
        let _ = self.hits.set(coord);

        if !self.vessels[idx].is_destroyed() {
            Outcome::ShipTouched
        } else if self.all_destroyed() {
            Outcome::ShipAllDestroyed
        } else {
            Outcome::ShipDestroyed
        }
    }

    /// Number of vessels with at least one intact part.
    pub fn remaining_vessel_count(&self) -> usize {
        self.vessels.iter().filter(|v| !v.is_destroyed()).count()
    }

    pub fn all_destroyed(&self) -> bool {
        self.remaining_vessel_count() == 0
    }

    /// Whether `coord` has already been fired at.
    pub fn is_guessed(&self, coord: Coordinate) -> bool {
        self.hits.contains(coord) || self.misses.contains(coord)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Every cell covered by a vessel.
    pub fn occupied(&self) -> &BitBoard {
        &self.occupied
    }

    /// Accepted guesses in the order they were played, as canonical tokens
    /// (`encode(decode(raw))`), not the raw commands: `A05` is stored as
    /// `a5`. Rejected commands are not recorded.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn hits(&self) -> &BitBoard {
        &self.hits
    }

    pub fn misses(&self) -> &BitBoard {
        &self.misses
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  size: {},\n  vessels: {:?},\n  occupied: {:?},\n  history: {:?}\n}}",
            self.size, self.vessels, self.occupied, self.history
        )
    }
}
