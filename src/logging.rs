#![cfg(feature = "std")]

use std::env;
use std::io::Write;
use log::{self, LevelFilter, Metadata, Record};

/// Writes `LEVEL [module] message` lines to stderr, leaving stdout to the board.
struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut err = std::io::stderr().lock();
            let _ = writeln!(err, "{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Parse a `BATTLESHIP_LOG` value (`off`, `error` .. `trace`, any case).
/// Unset or unrecognised values fall back to `info`.
pub fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by `BATTLESHIP_LOG`.
pub fn init_logging() {
    let level = log_level(env::var("BATTLESHIP_LOG").ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
