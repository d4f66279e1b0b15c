use crate::vessel::VesselClass;

/// Side length of the grid when none is given.
pub const DEFAULT_GRID_SIZE: usize = 10;
/// One column per letter of the alphabet.
pub const MAX_GRID_SIZE: usize = 26;

pub const FLEET_SIZE: usize = 3;
/// One battleship (the flagship) and two destroyers.
pub const FLEET: [VesselClass; FLEET_SIZE] = [
    VesselClass::new("battleship", 5),
    VesselClass::new("destroyer", 4),
    VesselClass::new("destroyer", 4),
];

/// Total number of vessel parts in the fleet.
pub const TOTAL_VESSEL_CELLS: usize = 5 + 4 + 4;

/// Origin resamples allowed per vessel before random placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "SALVO_LOG";
