#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use log::warn;

use crate::coord;
use crate::player::Player;

const PROMPT: &str = "Action: ";
const WARNING: &str = "Expect a letter and number. No space. Ex: A5";
const QUIT: &str = "quit";

/// Human player reading commands from a line-based input.
///
/// Only well-formed commands reach the game; bounds and repeats are left to
/// the grid, which reports them as outcomes.
pub struct CliPlayer<I, O> {
    input: I,
    output: O,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player attached to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> CliPlayer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                warn!("failed to read command: {}", e);
                None
            }
        }
    }
}

impl<I: BufRead, O: Write> Player for CliPlayer<I, O> {
    fn next_command(&mut self) -> Option<String> {
        loop {
            let _ = write!(self.output, "{}", PROMPT);
            let _ = self.output.flush();
            let line = self.read_line()?;
            if line.eq_ignore_ascii_case(QUIT) {
                return None;
            }
            if coord::is_well_formed(&line) {
                return Some(line);
            }
            let _ = writeln!(self.output, "{}", WARNING);
        }
    }
}
