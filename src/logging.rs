#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV_VAR;

/// Writes to stderr so stdout stays free for the game and JSON reports.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level filter for a `SALVO_LOG` value and a count of `-v` flags.
///
/// The variable sets the base level (`info` when unset or unparsable); each
/// `-v` raises it one step, capped at `trace`. `SALVO_LOG=off` stays off.
pub fn log_level(env_value: Option<&str>, verbose: u8) -> LevelFilter {
    let base = env_value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info);
    if base == LevelFilter::Off {
        return base;
    }
    LevelFilter::iter()
        .skip_while(|lvl| *lvl != base)
        .nth(usize::from(verbose))
        .unwrap_or(LevelFilter::Trace)
}

/// Install the stderr logger. The level comes from `SALVO_LOG`, raised by
/// `verbose` steps.
pub fn init_logging(verbose: u8) {
    let level = log_level(env::var(LOG_ENV_VAR).ok().as_deref(), verbose);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
