//! Vessel definitions: a straight line of parts, each hit individually.

use alloc::vec::Vec;
use core::fmt;

use crate::common::GridError;
use crate::coord::{Coordinate, Orientation};

/// Kind of vessel: name and number of parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselClass {
    name: &'static str,
    size: usize,
}

impl VesselClass {
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// One cell of a vessel and whether it has been struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    pub coord: Coordinate,
    pub hit: bool,
}

/// A vessel on the grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    class: VesselClass,
    parts: Vec<Part>,
}

/// Cells covered by a vessel of `size` parts laid from `origin`.
pub fn footprint(
    origin: Coordinate,
    orientation: Orientation,
    size: usize,
) -> impl Iterator<Item = Coordinate> {
    (0..size).map(move |i| origin.step(orientation, i))
}

impl Vessel {
    /// An unplaced vessel of the given class.
    pub fn new(class: VesselClass) -> Self {
        Self {
            class,
            parts: Vec::with_capacity(class.size()),
        }
    }

    /// Lay out the parts from `origin` along `orientation`. Bounds are the
    /// caller's concern; the grid checks them before placing.
    pub fn place(&mut self, origin: Coordinate, orientation: Orientation) -> Result<(), GridError> {
        if self.is_placed() {
            return Err(GridError::VesselAlreadyPlaced(self.class.name()));
        }
        self.parts.extend(
            footprint(origin, orientation, self.class.size()).map(|coord| Part { coord, hit: false }),
        );
        Ok(())
    }

    /// Mark the part at `coord` as hit. Returns `true` if the vessel covers
    /// `coord`, including parts already hit.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        match self.parts.iter_mut().find(|p| p.coord == coord) {
            Some(part) => {
                part.hit = true;
                true
            }
            None => false,
        }
    }

    /// True once every part is hit. An unplaced vessel is never destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.is_placed() && self.parts.iter().all(|p| p.hit)
    }

    pub fn is_placed(&self) -> bool {
        !self.parts.is_empty()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.parts.iter().any(|p| p.coord == coord)
    }

    pub fn hit_count(&self) -> usize {
        self.parts.iter().filter(|p| p.hit).count()
    }

    pub fn class(&self) -> VesselClass {
        self.class
    }

    pub fn size(&self) -> usize {
        self.class.size()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Cells occupied by the vessel, in placement order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.parts.iter().map(|p| p.coord)
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = self.parts.first().map(|p| p.coord);
        write!(
            f,
            "Vessel {{ name: \"{}\", size: {}, origin: {:?}, hits: {} }}",
            self.class.name(),
            self.class.size(),
            origin,
            self.hit_count(),
        )
    }
}
