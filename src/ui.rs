#![cfg(feature = "std")]

//! Terminal text for the interactive game: banners, outcome messages and
//! board rendering. Everything returns a `String`; the binaries print it.

use std::fmt::Write as _;

use crate::{
    common::Outcome,
    config::FLEET,
    coord::{self, Coordinate},
    game::Side,
    grid::Grid,
};

/// Introductory text shown before the first turn.
pub fn welcome() -> String {
    let mut fleet = String::new();
    for (i, class) in FLEET.iter().enumerate() {
        if i > 0 {
            fleet.push_str(if i + 1 == FLEET.len() { " & " } else { ", " });
        }
        let _ = write!(fleet, "1 {} ({} squares)", class.name(), class.size());
    }
    [
        "Welcome to salvo.".to_string(),
        "You are playing against the computer.".to_string(),
        format!("You both have {} placed randomly on the map.", fleet),
        "Example of command: A5".to_string(),
        String::new(),
        "Note: type 'quit' to exit the game.".to_string(),
        String::new(),
    ]
    .join("\n")
}

pub fn turn_header(side: Side) -> String {
    format!("===== {}'s turn =====", side.name())
}

/// Echo of a command played by the computer.
pub fn action(command: &str) -> String {
    format!("Action:  {}", command.to_ascii_uppercase())
}

/// Message describing `outcome` for the side that fired.
/// `remaining` is the number of vessels the opponent still has afloat.
pub fn describe(side: Side, outcome: Outcome, remaining: usize) -> String {
    let who = side.name();
    let text = match outcome {
        Outcome::MissedHit => format!("The {} hasn't hit any ship.", who),
        Outcome::ShipTouched => match side {
            Side::Player => format!("The {} touched a ship !! Shoot again!", who),
            Side::Computer => format!("The {} touched a ship !!", who),
        },
        Outcome::ShipDestroyed => format!(
            "The {} destroyed a ship. Shoot again! - Remaining ships to destroy: {}",
            who, remaining
        ),
        Outcome::ShipAllDestroyed => format!("The {} shot all ships !!", who),
        Outcome::AlreadyPlayed => "Already played, try again...".to_string(),
        Outcome::InvalidCommand => "This coordinate is too far, try again...".to_string(),
    };
    format!("Result:  {}", text)
}

pub fn victory() -> String {
    [
        "",
        "!!!!!!!!!!!!!!!!!!!!!!!",
        "!!!!! W I N N E R !!!!!",
        "!!!!!!!!!!!!!!!!!!!!!!!",
        "",
    ]
    .join("\n")
}

pub fn defeat() -> String {
    [
        "",
        "***********************",
        "#@!#@! GAME OVER #@!#@!",
        "***********************",
        "",
    ]
    .join("\n")
}

/// Render a grid as seen by the side firing at it. With `reveal` the
/// untouched vessel parts are shown too.
///
/// `X` hit, `o` miss, `S` vessel, `.` water. Rows are labelled with their
/// zero-based index, matching the command format.
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let mut out = String::from("   ");
    for column in 0..grid.size() {
        let _ = write!(out, " {}", coord::column_letter(column).unwrap_or('?'));
    }
    out.push('\n');
    for row in 0..grid.size() {
        let _ = write!(out, "{:2} ", row);
        for column in 0..grid.size() {
            let cell = Coordinate::new(column, row);
            let ch = if grid.hits().contains(cell) {
                'X'
            } else if grid.misses().contains(cell) {
                'o'
            } else if reveal && grid.occupied().contains(cell) {
                'S'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}
