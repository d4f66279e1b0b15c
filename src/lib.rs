#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod common;
mod config;
pub mod coord;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;
mod vessel;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use common::*;
pub use config::*;
pub use coord::{decode, encode, is_well_formed, Coordinate, Orientation};
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use vessel::*;
